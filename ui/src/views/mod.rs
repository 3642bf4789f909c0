mod generator;
pub use generator::Generator;
