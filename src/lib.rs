//! # Delta-Bar-Delta
//!
//! 梯度下降中逐参数自适应学习率的更新策略（Jacobs, 1988）。
//! 当某参数的梯度与其历史梯度的指数平均同号时，该参数的步长加性增长；异号时乘性衰减。
//!
//! 外部驱动循环（目标函数、迭代次数、收敛判断）不在本库范围内：
//! 驱动方用[`optimizer::DeltaBarDeltaUpdate`]为每次运行构建一份运行状态，
//! 再在每次迭代时调用一次[`optimizer::PolicyState::update`]。

pub mod errors;
pub mod optimizer;
pub mod utils;
