//! Performance-metric flavor: metric names, units, values, recommendations.

use crate::selection::choose_or;
use crate::session::DevelopmentType;
use rand::Rng;

pub const PERFORMANCE_METRIC_FALLBACK: &str = "Performance metric";
pub const RECOMMENDATION_FALLBACK: &str = "Review hot paths for optimization opportunities";
const UNIT_FALLBACK: &str = "ms";

fn performance_metrics(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "API Response Time",
            "Database Query Latency",
            "Request Throughput",
            "Cache Hit Ratio",
            "Connection Pool Utilization",
            "Queue Depth",
            "GC Pause Time",
        ],
        DevelopmentType::Frontend => &[
            "Render Time",
            "First Contentful Paint",
            "Time to Interactive",
            "Bundle Size",
            "Frame Rate",
            "Input Latency",
        ],
        DevelopmentType::Fullstack => &[
            "End-to-End Response Time",
            "Client-Server Round Trip",
            "State Synchronization Time",
            "Concurrent User Sessions",
            "Bandwidth Utilization",
        ],
        DevelopmentType::DataScience => &[
            "Data Processing Time",
            "Feature Extraction Time",
            "Prediction Latency",
            "Dataset Load Time",
            "Query Execution Time",
        ],
        DevelopmentType::DevOps => &[
            "Deployment Time",
            "Build Duration",
            "Container Startup Time",
            "Autoscaling Response Time",
            "Health Check Response Time",
        ],
        DevelopmentType::Blockchain => &[
            "Transaction Validation Time",
            "Block Creation Time",
            "Consensus Round Duration",
            "Gas Utilization Efficiency",
        ],
        DevelopmentType::MachineLearning => &[
            "Model Inference Time",
            "Training Epoch Duration",
            "Gradient Computation Time",
            "GPU Utilization",
            "Batch Processing Rate",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Context Switch Overhead",
            "Lock Contention Ratio",
            "Cache Miss Rate",
            "Syscall Latency",
            "Branch Prediction Accuracy",
        ],
        DevelopmentType::GameDevelopment => &[
            "Frame Render Time",
            "Physics Simulation Time",
            "Draw Call Count",
            "Collision Detection Time",
        ],
        DevelopmentType::Security => &[
            "Authentication Latency",
            "Signature Verification Time",
            "Threat Detection Latency",
            "Policy Evaluation Time",
        ],
        DevelopmentType::Mobile => &[],
    }
}

fn metric_units(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::DataScience | DevelopmentType::MachineLearning => &[
            "MB/s",
            "records/s",
            "samples/s",
            "ms/batch",
            "s/epoch",
            "%",
            "GB",
        ],
        DevelopmentType::Backend | DevelopmentType::Fullstack => {
            &["req/s", "ms", "μs", "MB/s", "connections", "%", "ops/s"]
        }
        DevelopmentType::Frontend | DevelopmentType::Mobile => {
            &["ms", "fps", "KB", "MB", "nodes", "s", "%"]
        }
        DevelopmentType::DevOps
        | DevelopmentType::Blockchain
        | DevelopmentType::SystemsProgramming
        | DevelopmentType::GameDevelopment
        | DevelopmentType::Security => &["ms", "s", "MB/s", "ops/s", "%", "MB", "count"],
    }
}

fn recommendations(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "Consider implementing request batching for high-volume endpoints",
            "Adding a distributed cache layer would reduce database load",
            "Implement circuit breakers for external service dependencies",
            "Consider a read replica for heavy read workloads",
        ],
        DevelopmentType::Frontend => &[
            "Implement code splitting to reduce initial bundle size",
            "Consider lazy loading for off-screen components",
            "Implement virtualization for long scrollable lists",
        ],
        DevelopmentType::Fullstack => &[
            "Consider GraphQL for more efficient data fetching",
            "Implement server-side rendering for improved initial load time",
            "Reduce client-server round trips with data denormalization",
        ],
        DevelopmentType::DataScience => &[
            "Consider incremental processing for large datasets",
            "Implement vectorized operations for numerical computations",
            "Optimize data loading with memory-mapped files",
        ],
        DevelopmentType::DevOps => &[
            "Implement horizontal scaling for improved throughput",
            "Optimize CI/CD pipeline for faster build times",
            "Consider blue-green deployments for zero downtime",
        ],
        DevelopmentType::Blockchain => &[
            "Optimize smart contract gas usage with storage pattern refinement",
            "Consider a layer 2 solution for improved throughput",
            "Batch signature verification during transaction validation",
        ],
        DevelopmentType::MachineLearning => &[
            "Implement mixed-precision training for better GPU utilization",
            "Consider knowledge distillation for a smaller model footprint",
            "Optimize data loading pipeline with prefetching",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Optimize memory access patterns for improved cache utilization",
            "Implement lock-free data structures for concurrent access",
            "Consider zero-copy strategies for data processing pipelines",
        ],
        DevelopmentType::GameDevelopment => &[
            "Implement object pooling for frequently created entities",
            "Optimize draw call batching for reduced GPU overhead",
            "Implement level of detail (LOD) for distant objects",
        ],
        DevelopmentType::Security => &[
            "Consider session caching for reduced authentication overhead",
            "Optimize security scanning with incremental analysis",
        ],
        DevelopmentType::Mobile => &[],
    }
}

pub fn performance_metric<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    choose_or(rng, performance_metrics(dev), PERFORMANCE_METRIC_FALLBACK)
}

pub fn metric_unit<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    choose_or(rng, metric_units(dev), UNIT_FALLBACK)
}

pub fn optimization_recommendation<R: Rng + ?Sized>(
    rng: &mut R,
    dev: DevelopmentType,
) -> &'static str {
    choose_or(rng, recommendations(dev), RECOMMENDATION_FALLBACK)
}

/// A plausible value for a metric measured in `unit`.
pub fn metric_value<R: Rng + ?Sized>(rng: &mut R, unit: &str) -> f64 {
    match unit {
        "%" => rng.gen_range(1.0..100.0),
        "ms" | "ms/batch" => rng.gen_range(0.5..250.0),
        "μs" => rng.gen_range(5.0..900.0),
        "s" | "s/epoch" => rng.gen_range(0.1..60.0),
        "fps" => rng.gen_range(24.0..144.0),
        "req/s" | "ops/s" | "records/s" | "samples/s" => rng.gen_range(100.0..50_000.0),
        "MB/s" | "MB" | "KB" => rng.gen_range(1.0..1_024.0),
        "GB" => rng.gen_range(0.5..64.0),
        _ => rng.gen_range(1.0..10_000.0),
    }
}
