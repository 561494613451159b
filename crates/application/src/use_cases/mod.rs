pub mod dns;

pub use dns::SynthesizeAnswersUseCase;
