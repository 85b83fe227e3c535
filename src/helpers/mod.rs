pub mod tree_materializer;
