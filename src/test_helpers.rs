//! Shared test helpers for unit tests.
//!
//! [`FakeDns`] answers lookups from in-memory tables and records every name it
//! was asked about.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Error, Result};
use async_trait::async_trait;

use crate::dns::DnsLookup;

/// In-memory [`DnsLookup`]. Names without an entry have no records.
#[derive(Default)]
pub struct FakeDns {
    mx: HashMap<String, Result<Vec<(u16, String)>, String>>,
    txt: HashMap<String, Result<Vec<String>, String>>,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mx(mut self, domain: &str, hosts: &[&str]) -> Self {
        let records = hosts
            .iter()
            .enumerate()
            .map(|(i, h)| ((i as u16 + 1) * 10, h.to_string()))
            .collect();
        self.mx.insert(domain.to_string(), Ok(records));
        self
    }

    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| r.to_string()).collect();
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    pub fn failing_mx(mut self, domain: &str, message: &str) -> Self {
        self.mx.insert(domain.to_string(), Err(message.to_string()));
        self
    }

    pub fn failing_txt(mut self, name: &str, message: &str) -> Self {
        self.txt.insert(name.to_string(), Err(message.to_string()));
        self
    }

    /// Makes every lookup sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Names queried so far, prefixed with the record type ("MX example.com").
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    async fn record_query(&self, kind: &str, name: &str) {
        self.queries.lock().unwrap().push(format!("{kind} {name}"));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DnsLookup for FakeDns {
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, Error> {
        self.record_query("MX", domain).await;
        match self.mx.get(domain) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    async fn txt_records(&self, name: &str) -> Result<Vec<String>, Error> {
        self.record_query("TXT", name).await;
        match self.txt.get(name) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
