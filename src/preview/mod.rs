//! Pull request preview drivers.
//!
//! [`synchronize`](synchronize::synchronize) and
//! [`sync_event`](synchronize::sync_event) mirror pull requests onto refs and
//! deployments; [`detect`](detect::detect) watches a pending deployment until
//! the preview host serves it.

pub mod deployment;
pub mod detect;
pub mod event;
pub mod mirror;
pub mod outcome;
pub mod ports;
pub mod probe;
pub mod synchronize;

pub use detect::{DEFAULT_POLLING_PERIOD, DetectOptions, detect, wait_for_deployment};
pub use event::{DeploymentStatusEvent, PullRequestEvent, load_event, parse_event};
pub use mirror::{DEFAULT_LABEL, MirrorPlan, RefAction, RefSnapshot, plan, should_be_mirrored};
pub use outcome::{NEUTRAL_EXIT_CODE, Outcome};
pub use ports::{DeploymentProbe, PreviewProject, RefStore};
pub use probe::HttpProbe;
pub use synchronize::{MirrorSettings, SyncReport, reconcile, sync_event, synchronize};
