mod constants;
pub use constants::{TAINT_CLUSTER_NOT_READY, TAINT_CLUSTER_UNREACHABLE};

mod effect;
pub use effect::TaintEffect;

mod operator;
pub use operator::TolerationOperator;

mod taint;
pub use taint::Taint;

mod toleration;
pub use toleration::Toleration;

mod placement;
pub use placement::Placement;
