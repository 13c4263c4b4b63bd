/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-16
 * @Description  : Delta-Bar-Delta 逐参数自适应步长更新策略
 *
 * 参考：Jacobs, R. A. (1988). Increased Rates of Convergence Through Learning Rate Adaptation.
 *       Neural Networks, 1(4), 295-307.
 */

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use super::base::{PolicyState, UpdatePolicy};
use crate::errors::{HyperParameter, Operand, OptimizerError, ValueRange};
use crate::utils::traits::float::Element;

/// 步长下限的默认值，防止步长因浮点下溢而变为0
pub const DEFAULT_MIN_STEP_SIZE: f64 = 1e-8;

/// Delta-Bar-Delta 更新策略的超参数持有者
///
/// 对每个参数：
/// - 若当前梯度与过往梯度的指数平均（delta-bar）同号，则该参数的步长加上`kappa`；
/// - 若异号，则步长减去其自身的`phi`比例；
/// - 任一为0时步长不变。
///
/// 即"加性增长、乘性衰减"：沿稳定下降方向缓慢放大步长，方向翻转时迅速收缩以抑制震荡。
/// 该策略对`kappa`与`phi`较敏感，默认值未必适用于所有问题。
///
/// 步长以`min_step_size`为下限（默认1e-8）。需要极精细调优的任务可将其调低。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaBarDeltaUpdate {
    /// 每个参数的初始步长
    initial_step_size: f64,
    /// 同号时步长的加性增量
    kappa: f64,
    /// 异号时步长的乘性衰减比例
    phi: f64,
    /// delta-bar 指数平均的衰减率
    theta: f64,
    /// 步长下限
    min_step_size: f64,
}

impl Default for DeltaBarDeltaUpdate {
    fn default() -> Self {
        Self::new(0.01, 0.002, 0.2, 0.8)
    }
}

impl DeltaBarDeltaUpdate {
    /// 创建更新策略，步长下限使用默认值[`DEFAULT_MIN_STEP_SIZE`]
    pub const fn new(initial_step_size: f64, kappa: f64, phi: f64, theta: f64) -> Self {
        Self {
            initial_step_size,
            kappa,
            phi,
            theta,
            min_step_size: DEFAULT_MIN_STEP_SIZE,
        }
    }

    pub const fn with_min_step_size(mut self, min_step_size: f64) -> Self {
        self.min_step_size = min_step_size;
        self
    }

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓超参数读写↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    pub const fn initial_step_size(&self) -> f64 {
        self.initial_step_size
    }
    pub const fn initial_step_size_mut(&mut self) -> &mut f64 {
        &mut self.initial_step_size
    }

    pub const fn kappa(&self) -> f64 {
        self.kappa
    }
    pub const fn kappa_mut(&mut self) -> &mut f64 {
        &mut self.kappa
    }

    pub const fn phi(&self) -> f64 {
        self.phi
    }
    pub const fn phi_mut(&mut self) -> &mut f64 {
        &mut self.phi
    }

    pub const fn theta(&self) -> f64 {
        self.theta
    }
    pub const fn theta_mut(&mut self) -> &mut f64 {
        &mut self.theta
    }

    pub const fn min_step_size(&self) -> f64 {
        self.min_step_size
    }
    pub const fn min_step_size_mut(&mut self) -> &mut f64 {
        &mut self.min_step_size
    }
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑超参数读写↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    /// 检查各超参数是否在合法区间内，返回遇到的第一个越界项
    ///
    /// 构建运行状态本身不做检查，由驱动方按需调用。
    pub fn validate(&self) -> Result<(), OptimizerError> {
        let checks = [
            (HyperParameter::InitialStepSize, self.initial_step_size, ValueRange::Positive),
            (HyperParameter::Kappa, self.kappa, ValueRange::NonNegative),
            (HyperParameter::Phi, self.phi, ValueRange::UnitClosed),
            (HyperParameter::Theta, self.theta, ValueRange::UnitHalfOpen),
            (HyperParameter::MinStepSize, self.min_step_size, ValueRange::NonNegative),
        ];
        for (name, value, range) in checks {
            if !range.contains(value) {
                return Err(OptimizerError::HyperParameterOutOfRange { name, value, range });
            }
        }
        Ok(())
    }

    /// 构建形状为`rows`x`cols`的运行状态
    pub fn instantiate<A: Element>(&self, rows: usize, cols: usize) -> DeltaBarDeltaState<A> {
        DeltaBarDeltaState::new(self, rows, cols)
    }

    /// 先`validate`再构建运行状态
    pub fn try_instantiate<A: Element>(
        &self,
        rows: usize,
        cols: usize,
    ) -> Result<DeltaBarDeltaState<A>, OptimizerError> {
        self.validate()?;
        Ok(self.instantiate(rows, cols))
    }

    /// 从JSON读取配置，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptimizerError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl UpdatePolicy for DeltaBarDeltaUpdate {
    type State<A: Element> = DeltaBarDeltaState<A>;

    fn instantiate<A: Element>(&self, rows: usize, cols: usize) -> Self::State<A> {
        DeltaBarDeltaUpdate::instantiate(self, rows, cols)
    }
}

/// 最近一次更新中各类位置的个数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// 同号（步长增长）的位置数
    pub agreed: usize,
    /// 异号（步长衰减）的位置数
    pub disagreed: usize,
    /// 任一为0（步长不变）的位置数
    pub neutral: usize,
}

/// Delta-Bar-Delta 的单次运行状态
///
/// 构建时从持有者拷贝超参数并转换为元素类型`A`，此后与持有者再无关联。
#[derive(Debug, Clone)]
pub struct DeltaBarDeltaState<A: Element> {
    /// 过往梯度的指数平均
    delta_bar: Array2<A>,
    /// 每个参数当前的步长
    epsilon: Array2<A>,

    // 转换为元素类型的超参数
    initial_step_size: A,
    kappa: A,
    phi: A,
    theta: A,
    min_step_size: A,

    last_stats: UpdateStats,
}

impl<A: Element> DeltaBarDeltaState<A> {
    pub fn new(parent: &DeltaBarDeltaUpdate, rows: usize, cols: usize) -> Self {
        let initial_step_size = A::from_hyper(parent.initial_step_size());
        log::debug!(
            "构建 Delta-Bar-Delta 运行状态：形状 {rows}x{cols}，初始步长 {}，kappa {}，phi {}，theta {}，步长下限 {}",
            parent.initial_step_size(),
            parent.kappa(),
            parent.phi(),
            parent.theta(),
            parent.min_step_size()
        );
        Self {
            delta_bar: Array2::zeros((rows, cols)),
            epsilon: Array2::from_elem((rows, cols), initial_step_size),
            initial_step_size,
            kappa: A::from_hyper(parent.kappa()),
            phi: A::from_hyper(parent.phi()),
            theta: A::from_hyper(parent.theta()),
            min_step_size: A::from_hyper(parent.min_step_size()),
            last_stats: UpdateStats::default(),
        }
    }

    pub fn delta_bar(&self) -> &Array2<A> {
        &self.delta_bar
    }

    pub fn epsilon(&self) -> &Array2<A> {
        &self.epsilon
    }

    pub fn initial_step_size(&self) -> A {
        self.initial_step_size
    }

    pub fn kappa(&self) -> A {
        self.kappa
    }

    pub fn phi(&self) -> A {
        self.phi
    }

    pub fn theta(&self) -> A {
        self.theta
    }

    pub fn min_step_size(&self) -> A {
        self.min_step_size
    }

    pub fn last_update_stats(&self) -> UpdateStats {
        self.last_stats
    }

    /// 与`update`相同，但形状不一致时返回错误而非panic
    pub fn try_update(
        &mut self,
        parameters: &mut Array2<A>,
        _step_size: f64,
        gradient: &Array2<A>,
    ) -> Result<(), OptimizerError> {
        self.check_shape(Operand::Parameters, parameters)?;
        self.check_shape(Operand::Gradient, gradient)?;
        self.apply(parameters, gradient);
        Ok(())
    }

    fn check_shape(&self, operand: Operand, matrix: &Array2<A>) -> Result<(), OptimizerError> {
        if matrix.shape() == self.epsilon.shape() {
            Ok(())
        } else {
            Err(OptimizerError::ShapeMismatch {
                operand,
                expected: self.epsilon.shape().to_vec(),
                got: matrix.shape().to_vec(),
            })
        }
    }

    /// 逐元素执行一次 Delta-Bar-Delta 更新（形状已检查）
    fn apply(&mut self, parameters: &mut Array2<A>, gradient: &Array2<A>) {
        let (kappa, phi, theta, min_step_size) =
            (self.kappa, self.phi, self.theta, self.min_step_size);
        let one = A::one();
        let mut stats = UpdateStats::default();

        Zip::from(&mut self.epsilon)
            .and(&mut self.delta_bar)
            .and(&mut *parameters)
            .and(gradient)
            .for_each(|epsilon, delta_bar, param, &grad| {
                // 当前梯度与历史平均的符号是否一致（用更新前的delta_bar）
                let sign = (grad * *delta_bar).sign();
                if sign == one {
                    *epsilon = *epsilon + kappa;
                    stats.agreed += 1;
                } else if sign == -one {
                    *epsilon = *epsilon - phi * *epsilon;
                    stats.disagreed += 1;
                } else {
                    stats.neutral += 1;
                }
                // 只设下限；NaN按IEEE-754原样保留
                if *epsilon < min_step_size {
                    *epsilon = min_step_size;
                }

                *delta_bar = theta * *delta_bar + (one - theta) * grad;

                *param = *param - *epsilon * grad;
            });

        log::trace!(
            "Delta-Bar-Delta 更新：同号 {}，异号 {}，不变 {}",
            stats.agreed,
            stats.disagreed,
            stats.neutral
        );
        self.last_stats = stats;
    }
}

impl<A: Element> PolicyState<A> for DeltaBarDeltaState<A> {
    /// 每次迭代调用一次。
    ///
    /// 注：`step_size`不参与计算，实际步长完全由逐参数的`epsilon`决定。
    fn update(&mut self, parameters: &mut Array2<A>, step_size: f64, gradient: &Array2<A>) {
        if let Err(err) = self.try_update(parameters, step_size, gradient) {
            panic!("{}", err);
        }
    }

    fn reset(&mut self) {
        log::debug!("重置 Delta-Bar-Delta 运行状态");
        self.delta_bar.fill(A::zero());
        self.epsilon.fill(self.initial_step_size);
        self.last_stats = UpdateStats::default();
    }

    fn shape(&self) -> (usize, usize) {
        self.epsilon.dim()
    }
}
