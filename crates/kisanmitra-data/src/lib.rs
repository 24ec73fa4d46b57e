// Mock data feeds and the load lifecycle around them
pub mod crops;
pub mod dashboard;
pub mod gazetteer;
pub mod markets;
pub mod prices;
pub mod schemes;
pub mod soil;
pub mod store;
pub mod trends;
pub mod weather;

pub use dashboard::{load_dashboard, DashboardData};
pub use store::{DataProvider, LoadState, RecordStore};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// RNG for the mock generators. A fixed seed makes a collection
/// reproducible; without one every load looks like a fresh market day.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
