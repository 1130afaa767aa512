//! System-monitoring and data-processing flavor.

use crate::selection::choose_or;
use crate::session::DevelopmentType;
use rand::Rng;

pub const SYSTEM_EVENT_FALLBACK: &str = "System heartbeat nominal";
pub const DATA_OPERATION_FALLBACK: &str = "Processing data batch";

fn system_events(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend | DevelopmentType::Fullstack => &[
            "Worker pool rebalanced across 4 nodes",
            "Connection pool warmed up",
            "Background job queue drained",
            "Cache eviction cycle completed",
        ],
        DevelopmentType::DevOps => &[
            "Node drained for kernel patch",
            "Horizontal pod autoscaler scaled to 6 replicas",
            "Log shipper backpressure cleared",
            "Certificate rotation scheduled",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Page cache flushed to disk",
            "Scheduler run queue balanced",
            "Huge pages reserved for allocator arena",
        ],
        DevelopmentType::MachineLearning | DevelopmentType::DataScience => &[
            "GPU memory defragmented",
            "Checkpoint written to object storage",
            "Spill-to-disk threshold adjusted",
        ],
        DevelopmentType::GameDevelopment => &[
            "Asset streaming budget rebalanced",
            "Shader cache warmed",
        ],
        DevelopmentType::Security => &[
            "Audit log segment sealed",
            "Intrusion detection signatures refreshed",
        ],
        DevelopmentType::Frontend
        | DevelopmentType::Blockchain
        | DevelopmentType::Mobile => &[],
    }
}

fn data_operations(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::DataScience => &[
            "Normalizing feature vectors",
            "Imputing missing values",
            "Joining event stream with user dimension",
            "Computing rolling aggregates",
        ],
        DevelopmentType::MachineLearning => &[
            "Tokenizing training corpus",
            "Shuffling training shards",
            "Augmenting image batch",
        ],
        DevelopmentType::Backend | DevelopmentType::Fullstack => &[
            "Replaying outbox events",
            "Compacting write-ahead log",
            "Reindexing search documents",
        ],
        DevelopmentType::Blockchain => &[
            "Replaying block history",
            "Pruning state trie",
        ],
        DevelopmentType::Security => &["Correlating authentication logs"],
        DevelopmentType::Frontend
        | DevelopmentType::DevOps
        | DevelopmentType::SystemsProgramming
        | DevelopmentType::GameDevelopment
        | DevelopmentType::Mobile => &[],
    }
}

pub fn system_event<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    choose_or(rng, system_events(dev), SYSTEM_EVENT_FALLBACK)
}

pub fn data_operation<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    choose_or(rng, data_operations(dev), DATA_OPERATION_FALLBACK)
}

pub fn record_count<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(1_000..2_500_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_system_event_fallback_only_for_absent() {
        let mut rng = StdRng::seed_from_u64(41);
        for dev in DevelopmentType::ALL {
            for _ in 0..20 {
                let event = system_event(&mut rng, dev);
                assert_eq!(
                    event == SYSTEM_EVENT_FALLBACK,
                    system_events(dev).is_empty(),
                    "{:?}",
                    dev
                );
            }
        }
    }

    #[test]
    fn test_data_operation_fallback_only_for_absent() {
        let mut rng = StdRng::seed_from_u64(42);
        for dev in DevelopmentType::ALL {
            for _ in 0..20 {
                let op = data_operation(&mut rng, dev);
                assert_eq!(op == DATA_OPERATION_FALLBACK, data_operations(dev).is_empty());
            }
        }
    }
}
