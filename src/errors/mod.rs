use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq)]
pub enum OptimizerError {
    // 矩阵形状须与构建运行状态时的形状一致
    #[error("{operand}的形状与运行状态不一致：期望{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        operand: Operand,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    // 超参数取值范围
    #[error("超参数{name}须在{range}内，实际为{value}")]
    HyperParameterOutOfRange {
        name: HyperParameter,
        value: f64,
        range: ValueRange,
    },
    #[error("配置解析失败：{0}")]
    Config(String),
}

impl From<serde_json::Error> for OptimizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
