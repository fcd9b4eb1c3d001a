//! Application configuration models.
//!
//! Every asynchronous operation in GradNet is a timer simulation of a
//! network call. The delay of each operation lives here so front ends and
//! tests can tune them without touching the services.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the application.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Simulated latencies, one per mock operation.
    #[serde(default)]
    pub delays: DelayConfig,
}

impl AppConfig {
    /// Configuration with every delay set to zero. Intended for tests.
    pub fn instant() -> Self {
        Self {
            delays: DelayConfig::instant(),
        }
    }
}

/// Simulated latency for each mock operation, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DelayConfig {
    /// Sign-in round trip
    #[serde(default = "default_sign_in_ms")]
    pub sign_in_ms: u64,
    /// Sign-out round trip
    #[serde(default = "default_sign_out_ms")]
    pub sign_out_ms: u64,
    /// Profile update round trip
    #[serde(default = "default_profile_update_ms")]
    pub profile_update_ms: u64,
    /// Latency before a sent message becomes visible
    #[serde(default = "default_message_send_ms")]
    pub message_send_ms: u64,
    /// Delay before the counterpart's canned reply arrives
    #[serde(default = "default_auto_reply_ms")]
    pub auto_reply_ms: u64,
    /// Delay when opening a conversation from a profile page
    #[serde(default = "default_connect_ms")]
    pub connect_ms: u64,
}

fn default_sign_in_ms() -> u64 {
    1000
}

fn default_sign_out_ms() -> u64 {
    500
}

fn default_profile_update_ms() -> u64 {
    500
}

fn default_message_send_ms() -> u64 {
    500
}

fn default_auto_reply_ms() -> u64 {
    1500
}

fn default_connect_ms() -> u64 {
    1000
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            sign_in_ms: default_sign_in_ms(),
            sign_out_ms: default_sign_out_ms(),
            profile_update_ms: default_profile_update_ms(),
            message_send_ms: default_message_send_ms(),
            auto_reply_ms: default_auto_reply_ms(),
            connect_ms: default_connect_ms(),
        }
    }
}

impl DelayConfig {
    /// All delays set to zero. Intended for tests.
    pub fn instant() -> Self {
        Self {
            sign_in_ms: 0,
            sign_out_ms: 0,
            profile_update_ms: 0,
            message_send_ms: 0,
            auto_reply_ms: 0,
            connect_ms: 0,
        }
    }

    pub fn sign_in(&self) -> Duration {
        Duration::from_millis(self.sign_in_ms)
    }

    pub fn sign_out(&self) -> Duration {
        Duration::from_millis(self.sign_out_ms)
    }

    pub fn profile_update(&self) -> Duration {
        Duration::from_millis(self.profile_update_ms)
    }

    pub fn message_send(&self) -> Duration {
        Duration::from_millis(self.message_send_ms)
    }

    pub fn auto_reply(&self) -> Duration {
        Duration::from_millis(self.auto_reply_ms)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }
}
