pub mod mru_cache;
