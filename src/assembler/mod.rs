mod dataset_assembler;

pub use dataset_assembler::DatasetAssembler;
