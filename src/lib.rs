pub mod config;
pub mod encoder;
pub mod pairing;
pub mod report;
pub mod run;

pub use config::{Args, Roots};
pub use encoder::{EncodeError, Encoder, EncoderSettings, FfmpegEncoder};
pub use pairing::{Discovery, FilePair, PairWalker, SubdirPair};
pub use report::{CollectingReporter, Notice, Reporter, TracingReporter};
pub use run::{exit_status, run, RunStats};
