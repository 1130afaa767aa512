//! Code-analysis flavor: file names, issues, complexity readings.

use crate::selection::choose_or;
use crate::session::DevelopmentType;
use rand::Rng;

pub const CODE_ISSUE_FALLBACK: &str = "Code smell";
const EXTENSION_FALLBACK: &str = "txt";
const COMPONENT_FALLBACK: &str = "Module";

fn extensions(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &["rs", "go", "java", "py", "ts", "rb", "cs", "scala"],
        DevelopmentType::Frontend => &["js", "ts", "jsx", "tsx", "vue", "scss", "svelte"],
        DevelopmentType::Fullstack => &["ts", "tsx", "rs", "go", "py", "vue", "rb"],
        DevelopmentType::DataScience => &["py", "ipynb", "R", "jl", "sql", "scala"],
        DevelopmentType::DevOps => &["yaml", "tf", "hcl", "sh", "Dockerfile", "toml"],
        DevelopmentType::Blockchain => &["sol", "rs", "move", "cairo", "vy", "wasm"],
        DevelopmentType::MachineLearning => &["py", "ipynb", "onnx", "pt", "cu", "cpp"],
        DevelopmentType::SystemsProgramming => &["rs", "c", "cpp", "h", "asm", "zig"],
        DevelopmentType::GameDevelopment => &["cpp", "h", "cs", "glsl", "hlsl", "shader"],
        DevelopmentType::Security => &["rs", "go", "c", "py", "yara", "rego"],
        DevelopmentType::Mobile => &["swift", "kt", "dart", "m", "java", "xml"],
    }
}

fn components(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "Service", "Controller", "Repository", "Handler", "Middleware", "Worker", "Queue",
            "Cache", "Adapter", "Mapper",
        ],
        DevelopmentType::Frontend => &[
            "Component", "Page", "View", "Layout", "Widget", "Hook", "Context", "Reducer", "Form",
            "Modal",
        ],
        DevelopmentType::Fullstack => &[
            "Service", "Component", "Connector", "Integration", "Api", "Bridge", "Orchestrator",
            "Facade", "Proxy",
        ],
        DevelopmentType::DataScience => &[
            "Analysis", "Transformer", "Pipeline", "Extractor", "Loader", "Predictor", "Feature",
            "Dataset", "Sampler",
        ],
        DevelopmentType::DevOps => &[
            "Deployment", "Pipeline", "Provisioner", "Monitor", "Alerter", "Backup", "Cluster",
            "Scheduler",
        ],
        DevelopmentType::Blockchain => &[
            "Contract", "Wallet", "Token", "Block", "Validator", "Ledger", "Oracle", "Bridge",
        ],
        DevelopmentType::MachineLearning => &[
            "Model", "Trainer", "Encoder", "Embedder", "Layer", "DataLoader", "Evaluator",
            "Callback", "Loss",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Allocator", "Scheduler", "Dispatcher", "Driver", "Buffer", "Channel", "Lock",
            "Interrupt",
        ],
        DevelopmentType::GameDevelopment => &[
            "Renderer", "Physics", "Entity", "Scene", "Animation", "Sprite", "Camera", "Particle",
            "Pathfinding",
        ],
        DevelopmentType::Security => &[
            "Auth", "Credential", "Certificate", "Hasher", "Signer", "Scanner", "Firewall",
            "Policy",
        ],
        DevelopmentType::Mobile => &[
            "ViewController", "Activity", "Fragment", "Screen", "Coordinator", "ViewModel",
            "Navigator", "Store",
        ],
    }
}

fn domain_prefixes(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "User", "Account", "Order", "Payment", "Inventory", "Shipment", "Notification",
            "Catalog", "Report",
        ],
        DevelopmentType::Frontend | DevelopmentType::Mobile => &[
            "Auth", "Profile", "Dashboard", "Settings", "Checkout", "Search", "Onboarding",
            "Navigation",
        ],
        DevelopmentType::Fullstack
        | DevelopmentType::DataScience
        | DevelopmentType::DevOps
        | DevelopmentType::Blockchain
        | DevelopmentType::MachineLearning
        | DevelopmentType::SystemsProgramming
        | DevelopmentType::GameDevelopment
        | DevelopmentType::Security => &[
            "Core", "Base", "Shared", "Default", "Dynamic", "Global", "Internal", "External",
        ],
    }
}

const COMMON_ISSUES: &[&str] = &[
    "Unused variable",
    "Unreachable code",
    "Missing error handling",
    "Inefficient algorithm",
    "Code duplication",
    "Overly complex method",
    "Deprecated API usage",
    "Resource leak",
];

fn specific_issues(dev: DevelopmentType) -> &'static [&'static str] {
    match dev {
        DevelopmentType::Backend => &[
            "Unoptimized database query",
            "Missing transaction boundary",
            "Inefficient connection management",
            "Race condition in concurrent request handling",
            "Insufficient rate limiting",
        ],
        DevelopmentType::Frontend => &[
            "Unnecessary component re-rendering",
            "Unhandled promise rejection",
            "Memory leak in event listener",
            "Non-accessible UI element",
            "Unoptimized asset loading",
        ],
        DevelopmentType::Fullstack => &[
            "Inconsistent data validation",
            "Mismatched data types across API boundary",
            "Duplicated business logic",
            "Race condition in state synchronization",
        ],
        DevelopmentType::DataScience => &[
            "Potential data leakage",
            "Missing null value handling",
            "Improper train-test split",
            "Numerical instability in calculation",
        ],
        DevelopmentType::DevOps => &[
            "Insecure configuration default",
            "Missing resource constraint",
            "Hardcoded credential",
            "Non-idempotent operation",
        ],
        DevelopmentType::Blockchain => &[
            "Gas inefficient operation",
            "Potential reentrancy vulnerability",
            "Unchecked external call result",
            "Front-running vulnerability",
        ],
        DevelopmentType::MachineLearning => &[
            "Unhandled gradient explosion risk",
            "Improper learning rate scheduling",
            "Memory inefficient tensor operation",
            "Missing early stopping criteria",
        ],
        DevelopmentType::SystemsProgramming => &[
            "Uninitialized memory access",
            "Buffer overflow risk",
            "Blocking I/O in critical path",
            "Undefined behavior risk",
        ],
        DevelopmentType::GameDevelopment => &[
            "Physics calculation in rendering thread",
            "Missing frame rate cap",
            "Unoptimized shader complexity",
            "Missing object pooling",
        ],
        DevelopmentType::Security => &[
            "Potential privilege escalation",
            "Insecure cryptographic algorithm",
            "Insecure direct object reference",
            "Improper certificate validation",
        ],
        DevelopmentType::Mobile => &[],
    }
}

const COMPLEXITY_METRICS: &[&str] = &[
    "Cyclomatic complexity: 5 (good)",
    "Cyclomatic complexity: 12 (moderate)",
    "Cyclomatic complexity: 25 (very high)",
    "Cognitive complexity: 7 (acceptable)",
    "Cognitive complexity: 22 (high)",
    "Maintainability index: 85 (highly maintainable)",
    "Maintainability index: 55 (difficult to maintain)",
    "Lines of code: 150 (large)",
    "Nesting depth: 3 (acceptable)",
    "Nesting depth: 6+ (very high)",
];

/// Generate a plausible source file name such as `PaymentService.rs`.
///
/// Two thirds of the time the prefix comes from the domain vocabulary,
/// otherwise from the component list; a prefix equal to the component is
/// dropped.
pub fn filename<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> String {
    let prefix = if rng.gen_ratio(2, 3) {
        choose_or(rng, domain_prefixes(dev), COMPONENT_FALLBACK)
    } else {
        choose_or(rng, components(dev), COMPONENT_FALLBACK)
    };
    let component = choose_or(rng, components(dev), COMPONENT_FALLBACK);
    let extension = choose_or(rng, extensions(dev), EXTENSION_FALLBACK);

    if prefix == component {
        format!("{}.{}", component, extension)
    } else {
        format!("{}{}.{}", prefix, component, extension)
    }
}

/// Pick a code issue: a third common issues, the rest type-specific.
///
/// Types without specific issues always draw from the common list.
pub fn code_issue<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> &'static str {
    let specific = specific_issues(dev);
    if specific.is_empty() || rng.gen_ratio(1, 3) {
        choose_or(rng, COMMON_ISSUES, CODE_ISSUE_FALLBACK)
    } else {
        choose_or(rng, specific, CODE_ISSUE_FALLBACK)
    }
}

pub fn complexity_metric<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    choose_or(rng, COMPLEXITY_METRICS, "Complexity: nominal")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_filename_has_known_extension() {
        let mut rng = StdRng::seed_from_u64(5);
        for dev in DevelopmentType::ALL {
            for _ in 0..50 {
                let name = filename(&mut rng, dev);
                let (_, ext) = name.rsplit_once('.').unwrap();
                assert!(extensions(dev).contains(&ext), "{} for {:?}", name, dev);
            }
        }
    }

    #[test]
    fn test_filename_does_not_repeat_component() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..500 {
            let name = filename(&mut rng, DevelopmentType::Backend);
            let stem = name.rsplit_once('.').unwrap().0;
            for component in components(DevelopmentType::Backend) {
                assert_ne!(stem, format!("{}{}", component, component));
            }
        }
    }

    #[test]
    fn test_code_issue_comes_from_tables() {
        let mut rng = StdRng::seed_from_u64(8);
        for dev in DevelopmentType::ALL {
            for _ in 0..50 {
                let issue = code_issue(&mut rng, dev);
                assert!(
                    COMMON_ISSUES.contains(&issue) || specific_issues(dev).contains(&issue),
                    "unexpected issue {}",
                    issue
                );
            }
        }
    }

    #[test]
    fn test_code_issue_without_specific_table_uses_common() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let issue = code_issue(&mut rng, DevelopmentType::Mobile);
            assert!(COMMON_ISSUES.contains(&issue));
        }
    }

    #[test]
    fn test_complexity_metric_from_table() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(COMPLEXITY_METRICS.contains(&complexity_metric(&mut rng)));
    }
}
