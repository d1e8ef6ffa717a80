pub mod rayon_pool;
