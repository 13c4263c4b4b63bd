use std::fmt::{self, Display};

/// 参与更新的矩阵
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Parameters,
    Gradient,
}
impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand_name = match self {
            Operand::Parameters => "参数矩阵",
            Operand::Gradient => "梯度矩阵",
        };
        write!(f, "{}", operand_name)
    }
}

/// Delta-Bar-Delta 的超参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyperParameter {
    InitialStepSize,
    Kappa,
    Phi,
    Theta,
    MinStepSize,
}
impl Display for HyperParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HyperParameter::InitialStepSize => "initial_step_size",
            HyperParameter::Kappa => "kappa",
            HyperParameter::Phi => "phi",
            HyperParameter::Theta => "theta",
            HyperParameter::MinStepSize => "min_step_size",
        };
        write!(f, "{}", name)
    }
}

/// 超参数的合法取值区间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRange {
    /// (0, +∞)
    Positive,
    /// [0, +∞)
    NonNegative,
    /// [0, 1]
    UnitClosed,
    /// [0, 1)
    UnitHalfOpen,
}
impl ValueRange {
    pub fn contains(&self, value: f64) -> bool {
        match self {
            ValueRange::Positive => value > 0.0,
            ValueRange::NonNegative => value >= 0.0,
            ValueRange::UnitClosed => (0.0..=1.0).contains(&value),
            ValueRange::UnitHalfOpen => (0.0..1.0).contains(&value),
        }
    }
}
impl Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = match self {
            ValueRange::Positive => "(0, +∞)",
            ValueRange::NonNegative => "[0, +∞)",
            ValueRange::UnitClosed => "[0, 1]",
            ValueRange::UnitHalfOpen => "[0, 1)",
        };
        write!(f, "{}", range)
    }
}
