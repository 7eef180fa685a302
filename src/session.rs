//! Driver Session
//!
//! Executes parsed commands against a string-keyed cache and turns each
//! outcome into a response.

use std::collections::BTreeMap;

use tracing::debug;

use crate::cache::PolicyCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    Command, CountResponse, DeleteResponse, DumpResponse, ErrorResponse, GetResponse,
    PutResponse, Response, StatsResponse,
};

/// A cache plus the command loop state around it.
#[derive(Debug)]
pub struct Session {
    cache: PolicyCache<String, String>,
}

impl Session {
    pub fn new(cache: PolicyCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a session whose cache is built from the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(PolicyCache::from_config(config)?))
    }

    pub fn cache(&self) -> &PolicyCache<String, String> {
        &self.cache
    }

    /// Parses and executes one input line.
    ///
    /// Blank lines and lines starting with `#` produce no response.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        match Command::parse(trimmed) {
            Ok(command) => Some(self.execute(command)),
            Err(err) => {
                debug!(error = %err, line = trimmed, "rejected input line");
                Some(Response::Error(ErrorResponse::new(err.to_string())))
            }
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Put { key, value } => {
                let stored_key = key.clone().filter(|_| value.is_some());
                match self.cache.put_opt(key, value) {
                    Ok(discarded) => match stored_key {
                        Some(key) => Response::Put(PutResponse::stored(key, discarded)),
                        None => Response::Put(PutResponse::ignored()),
                    },
                    Err(err) => Response::Error(ErrorResponse::new(err.to_string())),
                }
            }
            Command::Get { key } => match self.cache.get_opt(key.as_ref()) {
                Ok(value) => {
                    let value = value.clone();
                    Response::Get(GetResponse::new(key.unwrap_or_default(), value))
                }
                Err(err) => Response::Error(ErrorResponse::new(err.to_string())),
            },
            Command::Delete { key } => match self.cache.delete(&key) {
                Ok(_) => Response::Delete(DeleteResponse::new(key)),
                Err(err) => Response::Error(ErrorResponse::new(err.to_string())),
            },
            Command::Count => Response::Count(CountResponse {
                count: self.cache.count(),
                capacity: self.cache.capacity(),
                policy: self.cache.policy(),
            }),
            Command::Print => {
                let entries: BTreeMap<String, String> = self
                    .cache
                    .sorted_entries()
                    .into_iter()
                    .map(|entry| (entry.key.clone(), entry.value.clone()))
                    .collect();
                Response::Dump(DumpResponse { entries })
            }
            Command::Stats => Response::Stats(StatsResponse::new(
                self.cache.policy(),
                self.cache.stats(),
            )),
        }
    }
}
