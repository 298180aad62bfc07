use domain_maintenance::model::vo::ShiftContext;
use domain_maintenance::service::ShiftContextProvider;

/// Fixed shift context; stands in for the roster integration.
pub struct StaticShiftProvider {
    context: Option<ShiftContext>,
}

impl StaticShiftProvider {
    pub fn new(context: Option<ShiftContext>) -> Self {
        Self { context }
    }
}

impl ShiftContextProvider for StaticShiftProvider {
    fn current(&self) -> Option<ShiftContext> {
        self.context.clone()
    }
}
