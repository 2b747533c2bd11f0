//! Synthetic telemetry generation, standing in for a real data source.

use rand::Rng;

/// Companies a reading can originate from.
pub const COMPANIES: [&str; 3] = ["Dell", "IBM", "NetApp"];

/// Fault statuses reported when a reading is unhealthy.
pub const FAULTS: [&str; 3] = ["Overheating detected", "Disk failure", "Network issue"];

/// Status reported for a healthy reading.
pub const NO_ERRORS: &str = "No errors";

/// Records inserted per populate call.
pub const BATCH_SIZE: usize = 10;

/// One generated observation, not yet persisted.
#[derive(Debug, Clone)]
pub struct SyntheticReading {
    pub company: &'static str,
    pub capacity_used: f64,
    pub error_status: &'static str,
}

/// Generate a single random reading.
///
/// Capacity is assembled from a whole-percent part in 10..=90 and a
/// hundredths part in 0..=99, so the value always lands in [10.00, 90.99]
/// with at most two decimal places. The error status is "No errors" 80% of
/// the time, otherwise a uniformly chosen fault.
pub fn random_reading(rng: &mut impl Rng) -> SyntheticReading {
    let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];

    let whole = rng.gen_range(10..=90);
    let hundredths = rng.gen_range(0..100);
    let capacity_used = whole as f64 + hundredths as f64 / 100.0;

    let error_status = if rng.gen_bool(0.8) {
        NO_ERRORS
    } else {
        FAULTS[rng.gen_range(0..FAULTS.len())]
    };

    SyntheticReading {
        company,
        capacity_used,
        error_status,
    }
}

/// Generate one populate batch. The RNG is confined to this call; a
/// `ThreadRng` cannot be held across handler await points.
pub fn random_batch() -> Vec<SyntheticReading> {
    let mut rng = rand::thread_rng();
    (0..BATCH_SIZE).map(|_| random_reading(&mut rng)).collect()
}
