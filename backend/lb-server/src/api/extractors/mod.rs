pub mod current_identity;
