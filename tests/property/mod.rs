mod merge_laws;
mod update_laws;
