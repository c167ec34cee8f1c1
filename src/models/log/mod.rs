pub mod sync_log_entry;
