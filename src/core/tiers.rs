use serde::{Deserialize, Serialize};

pub const ONE_TIME_TIER_COUNTS: [u32; 11] = [10000, 5000, 2000, 1000, 300, 200, 100, 50, 25, 10, 5];

pub const SUBSCRIPTION_TIER_COUNTS: [u32; 11] =
    [10000, 5000, 2500, 1000, 500, 250, 100, 50, 25, 10, 5];

/// Customer counts to price against, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSchedule {
    #[serde(default = "default_one_time")]
    pub one_time: Vec<u32>,
    #[serde(default = "default_subscription")]
    pub subscription: Vec<u32>,
}

fn default_one_time() -> Vec<u32> {
    ONE_TIME_TIER_COUNTS.to_vec()
}

fn default_subscription() -> Vec<u32> {
    SUBSCRIPTION_TIER_COUNTS.to_vec()
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self {
            one_time: default_one_time(),
            subscription: default_subscription(),
        }
    }
}
