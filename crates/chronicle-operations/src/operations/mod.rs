mod release;

pub use release::{PreviewOutput, ReleaseInput, ReleaseOperation, ReleaseOutcome, ReleaseOutput};
