mod delete_object;
mod page;
mod tracing;
