mod reconcile;

pub use reconcile::ReconcileServiceImpl;
