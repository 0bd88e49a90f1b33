use std::{collections::BTreeMap, sync::Arc};

use super::Error;

/// Output ports visible on the system MIDI sequencer.
pub struct PortsOut {
    map: BTreeMap<Arc<str>, midir::MidiOutputPort>,
    client_name: Arc<str>,
}

impl PortsOut {
    pub fn new(client_name: impl Into<Arc<str>>) -> Self {
        PortsOut {
            map: BTreeMap::new(),
            client_name: client_name.into(),
        }
    }

    pub fn refresh(&mut self) -> Result<(), Error> {
        let temp_conn =
            midir::MidiOutput::new(&format!("{} refresh Out ports", self.client_name))?;

        self.map.clear();
        for port in temp_conn.ports().iter() {
            let name = temp_conn.port_name(port)?;
            if !name.starts_with(self.client_name.as_ref()) {
                log::debug!("Found Out port {name}");
                self.map.insert(name.into(), port.clone());
            }
        }

        Ok(())
    }

    /// Connects to the port named `port_name`.
    ///
    /// ALSA ports show up as "client:port", so a bare client name
    /// also matches that client's first port.
    pub fn connect(&mut self, port_name: &str) -> Result<midir::MidiOutputConnection, Error> {
        let port = self
            .map
            .iter()
            .find(|(name, _)| {
                name.strip_prefix(port_name)
                    .map_or(false, |rest| rest.is_empty() || rest.starts_with(':'))
            })
            .map(|(_, port)| port.clone())
            .ok_or_else(|| Error::PortNotFound(port_name.into()))?;

        let midi_conn = midir::MidiOutput::new(&self.client_name)?
            .connect(&port, &self.client_name)
            .map_err(|_| Error::PortConnection)?;

        log::debug!("Connected for Output to {port_name}");

        Ok(midi_conn)
    }
}
