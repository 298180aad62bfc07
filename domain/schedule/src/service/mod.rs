mod reconcile;

pub use reconcile::ReconcileService;
