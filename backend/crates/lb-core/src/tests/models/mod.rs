mod blacklist_entry;
mod record_filter;
mod vehicle;
