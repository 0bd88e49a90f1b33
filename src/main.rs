mod config;
use config::Config;

mod error;
use error::Error;

mod midi;

mod rig;

use std::process::ExitCode;

pub const APP_NAME: &str = "axerig";

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_module(APP_NAME, log::LevelFilter::Debug)
        .init();

    if let Err(err) = run() {
        log::error!("{err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<(), Error> {
    let config = Config::load()?;

    let mut device = rig::Device::open(&config.rig_device).map_err(|source| Error::DeviceOpen {
        path: config.rig_device.clone(),
        source,
    })?;

    let mut ports = midi::PortsOut::new(APP_NAME);
    ports.refresh()?;
    let mut midi_out = ports.connect(&config.port)?;

    let mut translator = rig::Translator::new(config.chan, config.switches, config.pedal);

    log::info!("Running, sending to {} on channel {}", config.port, config.chan);

    loop {
        let events = match device.fetch_events() {
            Ok(events) => events,
            Err(err) => {
                log::info!("Rig device stream ended ({err}), shutting down");
                break;
            }
        };

        for event in events {
            if let Some(cc) = translator.translate(&event) {
                log::debug!("Sending {cc:?}");

                if let Err(err) = midi_out.send(&cc.to_bytes()) {
                    log::warn!("Failed to send {cc:?}: {err}");
                }
            }
        }
    }

    Ok(())
}
