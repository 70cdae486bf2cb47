// Shared test helpers for DNS fixtures and in-memory runs.
//
// Each integration test file includes this with `mod helpers;`.

use std::collections::HashMap;

use anyhow::{anyhow, Error, Result};
use async_trait::async_trait;

use mailcheck::{run_check, CheckError, CheckSummary, Config, DnsLookup};

/// DNS answers served from memory. Names without an entry have no records.
#[derive(Default)]
pub struct StaticDns {
    mx: HashMap<String, Vec<(u16, String)>>,
    txt: HashMap<String, Vec<String>>,
    failing: Vec<String>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mx(mut self, domain: &str, host: &str) -> Self {
        self.mx
            .entry(domain.to_string())
            .or_default()
            .push((10, host.to_string()));
        self
    }

    pub fn txt(mut self, name: &str, record: &str) -> Self {
        self.txt
            .entry(name.to_string())
            .or_default()
            .push(record.to_string());
        self
    }

    /// Every lookup of `name` fails, whatever the record type.
    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }
}

#[async_trait]
impl DnsLookup for StaticDns {
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, Error> {
        if self.failing.iter().any(|n| n == domain) {
            return Err(anyhow!("SERVFAIL for {domain}"));
        }
        Ok(self.mx.get(domain).cloned().unwrap_or_default())
    }

    async fn txt_records(&self, name: &str) -> Result<Vec<String>, Error> {
        if self.failing.iter().any(|n| n == name) {
            return Err(anyhow!("SERVFAIL for {name}"));
        }
        Ok(self.txt.get(name).cloned().unwrap_or_default())
    }
}

/// Output of one in-memory run.
pub struct RunOutput {
    pub result: Result<CheckSummary, CheckError>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `input` through `run_check`, capturing both streams.
pub async fn run_with(config: &Config, input: &str, dns: &StaticDns) -> RunOutput {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let result = run_check(config, input.as_bytes(), dns, &mut stdout, &mut stderr).await;
    RunOutput {
        result,
        stdout: String::from_utf8(stdout).expect("stdout should be UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr should be UTF-8"),
    }
}
