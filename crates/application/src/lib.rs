//! visibleip-dns Application Layer
pub mod use_cases;

pub use use_cases::SynthesizeAnswersUseCase;
