pub mod synthesize_answers;

pub use synthesize_answers::SynthesizeAnswersUseCase;
