// ABOUTME: Affiliate dashboard types (mock data) and marketing channels
// ABOUTME: AffiliateStats sample figures and the MarketingChannel enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

use serde::{Deserialize, Serialize};

/// Outreach channel for generated marketing copy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MarketingChannel {
    /// Direct-message copy with a strong call to action
    Whatsapp,
    /// Caption-style copy for feed posts
    Instagram,
    /// Longer-form copy for mailing lists
    Email,
}

impl MarketingChannel {
    /// Display label embedded in prompts
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Whatsapp => "WhatsApp",
            Self::Instagram => "Instagram",
            Self::Email => "E-mail",
        }
    }
}

/// Affiliate performance figures shown on the dashboard
///
/// There is no real affiliate backend; the product ships the sample figures
/// below until one exists. No payment processing happens anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateStats {
    /// Link clicks
    pub clicks: u64,
    /// Completed signups
    pub signups: u64,
    /// Paying conversions
    pub conversions: u64,
    /// Total earnings in BRL
    pub earnings: f64,
    /// Earnings not yet paid out, in BRL
    pub pending_payout: f64,
    /// Position in the affiliate ranking
    pub rank: u32,
}

impl AffiliateStats {
    /// Sample figures displayed by the dashboard
    #[must_use]
    pub const fn sample() -> Self {
        Self {
            clicks: 1240,
            signups: 85,
            conversions: 32,
            earnings: 1450.50,
            pending_payout: 450.50,
            rank: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_labels() {
        assert_eq!(MarketingChannel::Whatsapp.as_str(), "WhatsApp");
        assert_eq!(MarketingChannel::Email.as_str(), "E-mail");
    }

    #[test]
    fn test_sample_stats_are_consistent() {
        let stats = AffiliateStats::sample();
        assert!(stats.signups <= stats.clicks);
        assert!(stats.conversions <= stats.signups);
        assert!(stats.pending_payout <= stats.earnings);
    }
}
