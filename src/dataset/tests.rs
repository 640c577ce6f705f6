mod classify;
mod summary;
