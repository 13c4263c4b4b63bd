/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16
 * @Description  : 更新策略的基础trait：长期存在的超参数持有者 + 每次运行独占的状态
 */

use ndarray::Array2;

use crate::utils::traits::float::Element;

/// 梯度下降更新策略（超参数持有者一侧）
///
/// 持有者只保存超参数，在每次优化运行开始时通过`instantiate`生成一份独立的运行状态。
/// 运行状态不借用持有者，故修改持有者不会影响已在进行中的运行。
///
/// # 使用示例
/// ```ignore
/// let policy = DeltaBarDeltaUpdate::new(0.01, 0.002, 0.2, 0.8);
/// let mut state = policy.instantiate::<f64>(rows, cols);
///
/// // 外部驱动循环
/// for _ in 0..max_iterations {
///     let gradient = function.gradient(&params);
///     state.update(&mut params, step_size, &gradient);
/// }
/// ```
pub trait UpdatePolicy {
    /// 运行状态，按矩阵元素类型参数化
    type State<A: Element>: PolicyState<A>;

    /// 以`rows`x`cols`的形状构建新的运行状态
    fn instantiate<A: Element>(&self, rows: usize, cols: usize) -> Self::State<A>;
}

/// 单次优化运行的策略状态
pub trait PolicyState<A: Element> {
    /// 一次迭代的参数更新（原地修改`parameters`）
    ///
    /// `parameters`与`gradient`的形状须与构建时一致，否则panic。
    fn update(&mut self, parameters: &mut Array2<A>, step_size: f64, gradient: &Array2<A>);

    /// 重置累积状态，回到刚构建时的样子
    fn reset(&mut self);

    /// 构建时确定的形状`(rows, cols)`
    fn shape(&self) -> (usize, usize);
}
