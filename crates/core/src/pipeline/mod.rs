pub mod trim_sermon_use_case;
