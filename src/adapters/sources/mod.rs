pub mod fs_source;
