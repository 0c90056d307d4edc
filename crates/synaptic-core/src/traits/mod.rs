mod activation;
mod audit;
mod detector;
mod heat;
mod id_generator;
mod learner;
mod selector;
mod synthesizer;

pub use activation::IActivationEngine;
pub use audit::{AuditEvent, IAuditSink, MemoryAuditSink, TracingAuditSink};
pub use detector::IContradictionDetector;
pub use heat::IHeatManager;
pub use id_generator::{IIdGenerator, SequentialIdGenerator, UuidGenerator};
pub use learner::IHebbianLearner;
pub use selector::IContextSelector;
pub use synthesizer::{ISynthesizer, NoOpSynthesizer};
