//! The candidate table.

use alloy::primitives::{address, Address, U256};

/// One freelance candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: &'static str,
    /// Payout address.
    pub address: Address,
    /// Star rating as shown to users, e.g. "4.7".
    pub rating: &'static str,
    /// Hourly rate in wei.
    pub hourly_rate_wei: U256,
    /// Relative path of the profile picture.
    pub image: &'static str,
}

const fn milli_ether(milli: u64) -> U256 {
    U256::from_limbs([milli * 1_000_000_000_000_000, 0, 0, 0])
}

// Kendall, Skye and Robin share Jo's payout address.
static CANDIDATES: [Candidate; 6] = [
    Candidate {
        name: "Lane",
        address: address!("aC8eB8B2ed5C4a0fC41a84Ee4950F417f67029F0"),
        rating: "4.3",
        hourly_rate_wei: milli_ether(200),
        image: "Images/lane.jpeg",
    },
    Candidate {
        name: "Ash",
        address: address!("2422858F9C4480c2724A309D58Ffd7Ac8bF65396"),
        rating: "5.0",
        hourly_rate_wei: milli_ether(330),
        image: "Images/ash.jpeg",
    },
    Candidate {
        name: "Jo",
        address: address!("8fD00f170FDf3772C5ebdCD90bF257316c69BA45"),
        rating: "4.7",
        hourly_rate_wei: milli_ether(190),
        image: "Images/jo.jpeg",
    },
    Candidate {
        name: "Kendall",
        address: address!("8fD00f170FDf3772C5ebdCD90bF257316c69BA45"),
        rating: "4.7",
        hourly_rate_wei: milli_ether(250),
        image: "Images/kendall.jpeg",
    },
    Candidate {
        name: "Skye",
        address: address!("8fD00f170FDf3772C5ebdCD90bF257316c69BA45"),
        rating: "4.5",
        hourly_rate_wei: milli_ether(220),
        image: "Images/skye.jpeg",
    },
    Candidate {
        name: "Robin",
        address: address!("8fD00f170FDf3772C5ebdCD90bF257316c69BA45"),
        rating: "4.2",
        hourly_rate_wei: milli_ether(150),
        image: "Images/robin.jpeg",
    },
];

/// All candidates in display order.
pub fn all() -> &'static [Candidate] {
    &CANDIDATES
}

/// Look a candidate up by exact name.
pub fn find(name: &str) -> Option<&'static Candidate> {
    CANDIDATES.iter().find(|c| c.name == name)
}

/// The candidate selected when none is chosen.
pub fn default_candidate() -> &'static Candidate {
    &CANDIDATES[0]
}
