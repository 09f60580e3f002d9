/// Read-only access to a value owned outside the list engine.
///
/// The engine never owns the category it presents. Callers inject a source
/// at construction and the engine snapshots it on demand, so upstream
/// changes become visible on the next read.
pub trait DataSource<T> {
    fn data(&self) -> T;
}
