use carta_base::EnumFromIndexT;
use carta_macros::{EnumCount, EnumFromIndex, EnumDisplay};
use crate::{Error, Result};

/// Order in which 3 euler angles are applied, named after the rotation axes.
///
/// `XYZ` composes the quaternion `q_x(a1) * q_y(a2) * q_z(a3)`: when rotating a vector, the z-rotation is applied first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum RotationOrder {
    XYX,
    XYZ,
    XZX,
    XZY,
    YXY,
    YXZ,
    YZX,
    YZY,
    ZXY,
    ZXZ,
    ZYX,
    ZYZ,
}

impl RotationOrder {
    /// Get the rotation order for a raw index
    pub fn try_from_raw(idx: usize) -> Result<Self> {
        Self::from_idx(idx).ok_or(Error::UnknownRotationOrder(idx))
    }

    /// Get the rotation order for a raw index
    ///
    /// # Panics
    ///
    /// Panics when `idx` does not name a rotation order.
    pub fn from_raw(idx: usize) -> Self {
        match Self::try_from_raw(idx) {
            Ok(order) => order,
            Err(err) => panic!("{err}"),
        }
    }

    /// Get the axes (0 = x, 1 = y, 2 = z) in the order the angles are passed
    pub fn axes(self) -> [usize; 3] {
        match self {
            RotationOrder::XYX => [0, 1, 0],
            RotationOrder::XYZ => [0, 1, 2],
            RotationOrder::XZX => [0, 2, 0],
            RotationOrder::XZY => [0, 2, 1],
            RotationOrder::YXY => [1, 0, 1],
            RotationOrder::YXZ => [1, 0, 2],
            RotationOrder::YZX => [1, 2, 0],
            RotationOrder::YZY => [1, 2, 1],
            RotationOrder::ZXY => [2, 0, 1],
            RotationOrder::ZXZ => [2, 0, 2],
            RotationOrder::ZYX => [2, 1, 0],
            RotationOrder::ZYZ => [2, 1, 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta_base::EnumCountT;

    #[test]
    fn raw_round_trip() {
        assert_eq!(RotationOrder::COUNT, 12);
        for idx in 0..RotationOrder::COUNT {
            let order = RotationOrder::from_raw(idx);
            assert_eq!(order as usize, idx);
        }
        assert_eq!(RotationOrder::from_raw(1), RotationOrder::XYZ);
        assert_eq!(RotationOrder::try_from_raw(12), Err(Error::UnknownRotationOrder(12)));
    }

    #[test]
    #[should_panic(expected = "Unknown rotation order: 42")]
    fn unknown_order_is_fatal() {
        let _ = RotationOrder::from_raw(42);
    }

    #[test]
    fn display() {
        assert_eq!(RotationOrder::ZYX.to_string(), "ZYX");
        assert_eq!(RotationOrder::XZX.to_string(), "XZX");
    }

    #[test]
    fn proper_euler_orders_repeat_the_first_axis() {
        for idx in 0..RotationOrder::COUNT {
            let [first, second, third] = RotationOrder::from_raw(idx).axes();
            assert_ne!(first, second);
            assert_ne!(second, third);
        }
    }
}
