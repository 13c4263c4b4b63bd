use ndarray::ScalarOperand;
use num_traits::Float;
use std::fmt::{Debug, Display};

/// 运行状态所用的矩阵元素类型
///
/// 超参数以`f64`保存，构建运行状态时经`from_hyper`一次性转换为元素类型。
pub trait Element: Float + ScalarOperand + Debug + Display + Send + Sync + 'static {
    fn from_hyper(value: f64) -> Self;

    /// 三值符号：正数为1，负数为-1，零（含±0）与NaN为0
    ///
    /// 注：`Float::signum`对+0.0返回1，不能直接使用
    fn sign(self) -> Self {
        if self > Self::zero() {
            Self::one()
        } else if self < Self::zero() {
            -Self::one()
        } else {
            Self::zero()
        }
    }
}

impl Element for f32 {
    fn from_hyper(value: f64) -> Self {
        value as Self
    }
}

impl Element for f64 {
    fn from_hyper(value: f64) -> Self {
        value
    }
}
