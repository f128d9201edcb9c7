pub mod execution_started;
