pub mod row_algorithm;
