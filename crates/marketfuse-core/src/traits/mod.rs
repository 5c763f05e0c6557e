mod observation_source;
mod reference_loader;

pub use observation_source::IObservationSource;
pub use reference_loader::IReferenceLoader;
