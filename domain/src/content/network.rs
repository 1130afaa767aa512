//! Network-traffic flavor: weighted HTTP methods and status codes, endpoints.

use crate::selection::{WeightedTable, choose_or, pick_weighted};
use crate::session::DevelopmentType;
use rand::Rng;

pub const ENDPOINT_FALLBACK: &str = "/api/v1/status";

const HTTP_METHODS: WeightedTable<&str> = &[
    ("GET", 60),
    ("POST", 20),
    ("PUT", 10),
    ("DELETE", 5),
    ("PATCH", 5),
];

const STATUS_CODES: WeightedTable<u16> = &[
    (200, 70),
    (201, 10),
    (204, 5),
    (304, 3),
    (400, 4),
    (401, 2),
    (403, 1),
    (404, 3),
    (500, 1),
    (503, 1),
];

fn endpoints(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend | DevelopmentType::Fullstack => &[
            "/api/v1/users",
            "/api/v1/orders",
            "/api/v1/payments",
            "/api/v2/inventory",
            "/api/v1/sessions",
            "/graphql",
        ],
        DevelopmentType::Frontend => &[
            "/static/js/main.chunk.js",
            "/assets/fonts/inter.woff2",
            "/api/v1/feature-flags",
            "/manifest.json",
        ],
        DevelopmentType::DevOps => &[
            "/healthz",
            "/readyz",
            "/metrics",
            "/v1/deployments",
            "/v2/registry/manifests/latest",
        ],
        DevelopmentType::DataScience | DevelopmentType::MachineLearning => &[
            "/v1/models/predict",
            "/v1/datasets/ingest",
            "/v1/features/batch",
            "/v1/experiments",
        ],
        DevelopmentType::Blockchain => &["/rpc", "/v1/blocks/latest", "/v1/tx/broadcast"],
        DevelopmentType::Security => &["/oauth/token", "/v1/audit/events", "/.well-known/jwks.json"],
        DevelopmentType::Mobile => &["/api/v1/devices/register", "/api/v1/push", "/api/v1/sync"],
        DevelopmentType::SystemsProgramming | DevelopmentType::GameDevelopment => &[],
    }
}

pub fn http_method<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick_weighted(rng, HTTP_METHODS).copied().unwrap_or("GET")
}

pub fn status_code<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    pick_weighted(rng, STATUS_CODES).copied().unwrap_or(200)
}

pub fn endpoint<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    choose_or(rng, endpoints(dev), ENDPOINT_FALLBACK)
}

/// Response latency; server errors tend to be slow.
pub fn latency_ms<R: Rng + ?Sized>(rng: &mut R, status: u16) -> u32 {
    if status >= 500 {
        rng.gen_range(800..5_000)
    } else if status == 304 {
        rng.gen_range(1..15)
    } else {
        rng.gen_range(5..400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_method_distribution_follows_weights() {
        let mut rng = StdRng::seed_from_u64(31);
        let trials = 20_000;
        let gets = (0..trials)
            .filter(|_| http_method(&mut rng) == "GET")
            .count();
        let ratio = gets as f64 / trials as f64;
        assert!((0.57..0.63).contains(&ratio), "GET ratio {}", ratio);
    }

    #[test]
    fn test_status_codes_are_known() {
        let mut rng = StdRng::seed_from_u64(32);
        let known: Vec<u16> = STATUS_CODES.iter().map(|(c, _)| *c).collect();
        for _ in 0..1_000 {
            assert!(known.contains(&status_code(&mut rng)));
        }
    }

    #[test]
    fn test_endpoint_fallback() {
        let mut rng = StdRng::seed_from_u64(33);
        for dev in DevelopmentType::ALL {
            let ep = endpoint(&mut rng, dev);
            if endpoints(dev).is_empty() {
                assert_eq!(ep, ENDPOINT_FALLBACK);
            } else {
                assert_ne!(ep, ENDPOINT_FALLBACK);
            }
        }
    }

    #[test]
    fn test_server_errors_are_slow() {
        let mut rng = StdRng::seed_from_u64(34);
        for _ in 0..100 {
            assert!(latency_ms(&mut rng, 503) >= 800);
            assert!(latency_ms(&mut rng, 304) < 15);
        }
    }
}
