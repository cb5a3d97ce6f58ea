//! Traversal styles: one topology, a direction, and a role.

use rove_core::{Bounds, WalkError};
use std::fmt;

/// Fixed block shapes for the block sampler, named width x height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockShape {
    /// 16 wide, 16 tall.
    Square16,
    /// 8 wide, 8 tall.
    Square8,
    /// 16 wide, 8 tall.
    Wide16x8,
    /// 8 wide, 16 tall.
    Tall8x16,
}

impl BlockShape {
    /// Block width in pixels.
    pub const fn width(self) -> usize {
        match self {
            Self::Square16 | Self::Wide16x8 => 16,
            Self::Square8 | Self::Tall8x16 => 8,
        }
    }

    /// Block height in pixels.
    pub const fn height(self) -> usize {
        match self {
            Self::Square16 | Self::Tall8x16 => 16,
            Self::Square8 | Self::Wide16x8 => 8,
        }
    }

    /// Pixels per block.
    pub const fn samples(self) -> usize {
        self.width() * self.height()
    }
}

/// The base traversal topology of a cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Row-major scan of the bounds.
    Linear,
    /// Walks rows. As a sub-cursor, walks the rows of the parent's column.
    AxisRow,
    /// Walks columns. As a sub-cursor, walks the columns of the parent's row.
    AxisCol,
    /// Concentric rings; reports each ring's top-left corner.
    Orbital,
    /// The pixels of the parent orbital cursor's current ring.
    SubOrbit,
    /// The up-to-8 cells around the parent's cell.
    Moore,
    /// The up-to-4 orthogonal cells around the parent's cell.
    VonNeumann,
    /// The up-to-24 cells in two rings around the parent's cell.
    Moore2,
    /// Block-major, row-major-within-block scan.
    Block(BlockShape),
}

impl Topology {
    /// Packed topology id (low bits of [`Style::bits`]).
    pub const fn id(self) -> u16 {
        match self {
            Self::Linear => 0,
            Self::AxisRow => 1,
            Self::AxisCol => 2,
            Self::Orbital => 3,
            Self::SubOrbit => 4,
            Self::Moore => 5,
            Self::VonNeumann => 6,
            Self::Moore2 => 7,
            Self::Block(BlockShape::Square16) => 8,
            Self::Block(BlockShape::Square8) => 9,
            Self::Block(BlockShape::Wide16x8) => 10,
            Self::Block(BlockShape::Tall8x16) => 11,
        }
    }

    /// Inverse of [`Topology::id`].
    pub const fn from_id(id: u16) -> Option<Self> {
        Some(match id {
            0 => Self::Linear,
            1 => Self::AxisRow,
            2 => Self::AxisCol,
            3 => Self::Orbital,
            4 => Self::SubOrbit,
            5 => Self::Moore,
            6 => Self::VonNeumann,
            7 => Self::Moore2,
            8 => Self::Block(BlockShape::Square16),
            9 => Self::Block(BlockShape::Square8),
            10 => Self::Block(BlockShape::Wide16x8),
            11 => Self::Block(BlockShape::Tall8x16),
            _ => return None,
        })
    }

    /// `true` for the three neighbourhood topologies.
    pub const fn is_neighbourhood(self) -> bool {
        matches!(self, Self::Moore | Self::VonNeumann | Self::Moore2)
    }

    /// `true` if the topology only makes sense under a parent cursor.
    pub const fn is_inherently_sub(self) -> bool {
        matches!(self, Self::SubOrbit) || self.is_neighbourhood()
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::AxisRow => "axis-row",
            Self::AxisCol => "axis-col",
            Self::Orbital => "orbital",
            Self::SubOrbit => "sub-orbit",
            Self::Moore => "moore",
            Self::VonNeumann => "von-neumann",
            Self::Moore2 => "moore2",
            Self::Block(BlockShape::Square16) => "block-16x16",
            Self::Block(BlockShape::Square8) => "block-8x8",
            Self::Block(BlockShape::Wide16x8) => "block-16x8",
            Self::Block(BlockShape::Tall8x16) => "block-8x16",
        }
    }
}

/// Traversal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The topology's natural order.
    Forward,
    /// The natural order, back to front.
    Reverse,
}

/// Whether a cursor owns its frame or derives it from a parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Walks its own bounds.
    Root,
    /// Walks a frame derived from its parent's current position.
    Sub,
}

/// An immutable traversal style.
///
/// The cross product of topology, direction and role is open, but the
/// named combinations consumers rely on are provided as constants and
/// listed by [`Style::catalogue`].
///
/// # Examples
///
/// ```
/// use rove_cursor::{Direction, Style, Topology};
///
/// let s = Style::ORBITAL_OUT;
/// assert_eq!(s.topology, Topology::Orbital);
/// assert_eq!(s.direction, Direction::Reverse);
/// assert_eq!(s.to_string(), "orbital-out");
/// assert_eq!(Style::from_bits(s.bits()).unwrap(), s);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Base topology.
    pub topology: Topology,
    /// Forward or reverse.
    pub direction: Direction,
    /// Root or sub-cursor.
    pub role: Role,
}

/// Bit marking a reverse style in [`Style::bits`].
pub const REVERSE_BIT: u16 = 0x0100;
/// Bit marking a sub-cursor style in [`Style::bits`].
pub const SUB_BIT: u16 = 0x0200;
/// Mask selecting the topology id in [`Style::bits`].
pub const TOPOLOGY_MASK: u16 = 0x000f;

const fn root(topology: Topology, direction: Direction) -> Style {
    Style::new(topology, direction, Role::Root)
}

const fn sub(topology: Topology, direction: Direction) -> Style {
    Style::new(topology, direction, Role::Sub)
}

use Direction::{Forward, Reverse};

impl Style {
    /// Row-major scan.
    pub const LINEAR: Style = root(Topology::Linear, Forward);
    /// Row-major scan, back to front.
    pub const LINEAR_REVERSE: Style = root(Topology::Linear, Reverse);
    /// Walks rows top to bottom.
    pub const AXIS_ROW: Style = root(Topology::AxisRow, Forward);
    /// Walks rows bottom to top.
    pub const AXIS_ROW_REVERSE: Style = root(Topology::AxisRow, Reverse);
    /// Walks columns left to right.
    pub const AXIS_COL: Style = root(Topology::AxisCol, Forward);
    /// Walks columns right to left.
    pub const AXIS_COL_REVERSE: Style = root(Topology::AxisCol, Reverse);
    /// Walks rows down the parent's column.
    pub const SUB_AXIS_ROW: Style = sub(Topology::AxisRow, Forward);
    /// Walks rows up the parent's column.
    pub const SUB_AXIS_ROW_REVERSE: Style = sub(Topology::AxisRow, Reverse);
    /// Walks columns along the parent's row.
    pub const SUB_AXIS_COL: Style = sub(Topology::AxisCol, Forward);
    /// Walks columns back along the parent's row.
    pub const SUB_AXIS_COL_REVERSE: Style = sub(Topology::AxisCol, Reverse);
    /// Rings from the bounds inward.
    pub const ORBITAL_IN: Style = root(Topology::Orbital, Forward);
    /// Rings from the core outward.
    pub const ORBITAL_OUT: Style = root(Topology::Orbital, Reverse);
    /// The parent ring's pixels, clockwise from its top-left corner.
    pub const SUB_ORBIT_CLOCKWISE: Style = sub(Topology::SubOrbit, Forward);
    /// The parent ring's pixels, anticlockwise back to its top-left corner.
    pub const SUB_ORBIT_ANTICLOCKWISE: Style = sub(Topology::SubOrbit, Reverse);
    /// 8-cell neighbourhood, clockwise from North.
    pub const MOORE: Style = sub(Topology::Moore, Forward);
    /// 8-cell neighbourhood, anticlockwise.
    pub const MOORE_REVERSE: Style = sub(Topology::Moore, Reverse);
    /// 4-cell neighbourhood, clockwise from North.
    pub const VON_NEUMANN: Style = sub(Topology::VonNeumann, Forward);
    /// 4-cell neighbourhood, anticlockwise.
    pub const VON_NEUMANN_REVERSE: Style = sub(Topology::VonNeumann, Reverse);
    /// 24-cell neighbourhood, inner ring then outer ring.
    pub const MOORE2: Style = sub(Topology::Moore2, Forward);
    /// 24-cell neighbourhood, outer ring then inner ring.
    pub const MOORE2_REVERSE: Style = sub(Topology::Moore2, Reverse);
    /// 16x16 blocks, forward.
    pub const BLOCK_16X16: Style = root(Topology::Block(BlockShape::Square16), Forward);
    /// 16x16 blocks, reverse.
    pub const BLOCK_16X16_REVERSE: Style = root(Topology::Block(BlockShape::Square16), Reverse);
    /// 8x8 blocks, forward.
    pub const BLOCK_8X8: Style = root(Topology::Block(BlockShape::Square8), Forward);
    /// 8x8 blocks, reverse.
    pub const BLOCK_8X8_REVERSE: Style = root(Topology::Block(BlockShape::Square8), Reverse);
    /// 16x8 blocks, forward.
    pub const BLOCK_16X8: Style = root(Topology::Block(BlockShape::Wide16x8), Forward);
    /// 16x8 blocks, reverse.
    pub const BLOCK_16X8_REVERSE: Style = root(Topology::Block(BlockShape::Wide16x8), Reverse);
    /// 8x16 blocks, forward.
    pub const BLOCK_8X16: Style = root(Topology::Block(BlockShape::Tall8x16), Forward);
    /// 8x16 blocks, reverse.
    pub const BLOCK_8X16_REVERSE: Style = root(Topology::Block(BlockShape::Tall8x16), Reverse);

    /// Build a style from its parts.
    pub const fn new(topology: Topology, direction: Direction, role: Role) -> Self {
        Self {
            topology,
            direction,
            role,
        }
    }

    /// Every named style, forward before reverse.
    pub const fn catalogue() -> &'static [Style] {
        &CATALOGUE
    }

    /// The same style walking the other way.
    pub const fn reversed(self) -> Self {
        let direction = match self.direction {
            Forward => Reverse,
            Reverse => Forward,
        };
        Self::new(self.topology, direction, self.role)
    }

    /// The same style as a sub-cursor.
    pub const fn as_sub(self) -> Self {
        Self::new(self.topology, self.direction, Role::Sub)
    }

    /// `true` for reverse styles.
    pub const fn is_reverse(self) -> bool {
        matches!(self.direction, Reverse)
    }

    /// `true` for sub-cursor styles.
    pub const fn is_sub(self) -> bool {
        matches!(self.role, Role::Sub)
    }

    /// Amount the step counter sits ahead of the logical position.
    ///
    /// Reverse cursors read one position behind their counter.
    pub const fn bias(self) -> usize {
        if self.is_reverse() {
            1
        } else {
            0
        }
    }

    /// `true` if the style cannot be placed without a parent cursor.
    pub const fn needs_parent(self) -> bool {
        self.topology.is_inherently_sub()
            || (self.is_sub() && matches!(self.topology, Topology::AxisRow | Topology::AxisCol))
    }

    /// Packed form: topology id in the low bits, plus [`REVERSE_BIT`] and
    /// [`SUB_BIT`].
    pub const fn bits(self) -> u16 {
        let mut bits = self.topology.id();
        if self.is_reverse() {
            bits |= REVERSE_BIT;
        }
        if self.is_sub() {
            bits |= SUB_BIT;
        }
        bits
    }

    /// Unpack a value produced by [`Style::bits`].
    pub fn from_bits(bits: u16) -> Result<Self, WalkError> {
        if bits & !(TOPOLOGY_MASK | REVERSE_BIT | SUB_BIT) != 0 {
            return Err(WalkError::UnknownStyleBits { bits });
        }
        let topology =
            Topology::from_id(bits & TOPOLOGY_MASK).ok_or(WalkError::UnknownStyleBits { bits })?;
        let direction = if bits & REVERSE_BIT != 0 {
            Reverse
        } else {
            Forward
        };
        let role = if bits & SUB_BIT != 0 {
            Role::Sub
        } else {
            Role::Root
        };
        Ok(Self::new(topology, direction, role))
    }

    /// Check that `bounds` hold a whole number of blocks.
    ///
    /// Always `Ok` for non-block styles.
    pub fn check_block_alignment(self, bounds: Bounds) -> Result<(), WalkError> {
        if let Topology::Block(shape) = self.topology {
            let (w, h) = (bounds.width(), bounds.height());
            if w % shape.width() != 0 || h % shape.height() != 0 {
                return Err(WalkError::MisalignedBlocks {
                    bounds,
                    block_width: shape.width(),
                    block_height: shape.height(),
                });
            }
        }
        Ok(())
    }
}

const CATALOGUE: [Style; 28] = [
    Style::LINEAR,
    Style::LINEAR_REVERSE,
    Style::AXIS_ROW,
    Style::AXIS_ROW_REVERSE,
    Style::AXIS_COL,
    Style::AXIS_COL_REVERSE,
    Style::SUB_AXIS_ROW,
    Style::SUB_AXIS_ROW_REVERSE,
    Style::SUB_AXIS_COL,
    Style::SUB_AXIS_COL_REVERSE,
    Style::ORBITAL_IN,
    Style::ORBITAL_OUT,
    Style::SUB_ORBIT_CLOCKWISE,
    Style::SUB_ORBIT_ANTICLOCKWISE,
    Style::MOORE,
    Style::MOORE_REVERSE,
    Style::VON_NEUMANN,
    Style::VON_NEUMANN_REVERSE,
    Style::MOORE2,
    Style::MOORE2_REVERSE,
    Style::BLOCK_16X16,
    Style::BLOCK_16X16_REVERSE,
    Style::BLOCK_8X8,
    Style::BLOCK_8X8_REVERSE,
    Style::BLOCK_16X8,
    Style::BLOCK_16X8_REVERSE,
    Style::BLOCK_8X16,
    Style::BLOCK_8X16_REVERSE,
];

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sub() && !self.topology.is_inherently_sub() {
            f.write_str("sub-")?;
        }
        f.write_str(self.topology.name())?;
        let suffix = match (self.topology, self.direction) {
            (Topology::Orbital, Forward) => "-in",
            (Topology::Orbital, Reverse) => "-out",
            (Topology::SubOrbit, Forward) => "-clockwise",
            (Topology::SubOrbit, Reverse) => "-anticlockwise",
            (_, Forward) => "",
            (_, Reverse) => "-reverse",
        };
        f.write_str(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    #[test]
    fn catalogue_bits_are_distinct_and_round_trip() {
        let bits: IndexSet<u16> = Style::catalogue().iter().map(|s| s.bits()).collect();
        assert_eq!(bits.len(), Style::catalogue().len());
        for s in Style::catalogue() {
            assert_eq!(Style::from_bits(s.bits()).unwrap(), *s);
        }
    }

    #[test]
    fn masking_recovers_the_topology() {
        let bits = Style::SUB_AXIS_COL_REVERSE.bits();
        assert_eq!(bits & SUB_BIT, SUB_BIT);
        assert_eq!(bits & REVERSE_BIT, REVERSE_BIT);
        assert_eq!(
            Topology::from_id(bits & TOPOLOGY_MASK),
            Some(Topology::AxisCol)
        );
    }

    #[test]
    fn from_bits_rejects_unknown_values() {
        assert!(matches!(
            Style::from_bits(0x000c),
            Err(WalkError::UnknownStyleBits { bits: 0x000c })
        ));
        assert!(matches!(
            Style::from_bits(0x0400),
            Err(WalkError::UnknownStyleBits { .. })
        ));
    }

    #[test]
    fn display_names() {
        assert_eq!(Style::LINEAR.to_string(), "linear");
        assert_eq!(Style::SUB_AXIS_ROW_REVERSE.to_string(), "sub-axis-row-reverse");
        assert_eq!(Style::ORBITAL_IN.to_string(), "orbital-in");
        assert_eq!(
            Style::SUB_ORBIT_ANTICLOCKWISE.to_string(),
            "sub-orbit-anticlockwise"
        );
        assert_eq!(Style::MOORE2_REVERSE.to_string(), "moore2-reverse");
        assert_eq!(Style::BLOCK_16X8.to_string(), "block-16x8");
        assert_eq!(Style::LINEAR.as_sub().to_string(), "sub-linear");
    }

    #[test]
    fn catalogue_names_are_unique() {
        let names: IndexSet<String> = Style::catalogue().iter().map(|s| s.to_string()).collect();
        assert_eq!(names.len(), 28);
    }

    #[test]
    fn reverse_styles_carry_a_bias() {
        assert_eq!(Style::LINEAR.bias(), 0);
        assert_eq!(Style::LINEAR_REVERSE.bias(), 1);
        assert_eq!(Style::MOORE.reversed(), Style::MOORE_REVERSE);
    }

    #[test]
    fn needs_parent_covers_sub_topologies() {
        assert!(Style::MOORE.needs_parent());
        assert!(Style::SUB_ORBIT_CLOCKWISE.needs_parent());
        assert!(Style::SUB_AXIS_COL.needs_parent());
        assert!(!Style::AXIS_COL.needs_parent());
        assert!(!Style::LINEAR.as_sub().needs_parent());
    }

    #[test]
    fn block_alignment() {
        let aligned = Bounds::new(0, 0, 31, 15);
        assert!(Style::BLOCK_16X16.check_block_alignment(aligned).is_ok());
        assert!(Style::BLOCK_8X16.check_block_alignment(aligned).is_ok());
        let ragged = Bounds::new(0, 0, 31, 20);
        assert!(matches!(
            Style::BLOCK_8X8.check_block_alignment(ragged),
            Err(WalkError::MisalignedBlocks { block_width: 8, .. })
        ));
        assert!(Style::LINEAR.check_block_alignment(ragged).is_ok());
    }

    #[test]
    fn block_shapes_are_width_by_height() {
        assert_eq!(BlockShape::Wide16x8.width(), 16);
        assert_eq!(BlockShape::Wide16x8.height(), 8);
        assert_eq!(BlockShape::Tall8x16.samples(), 128);
    }
}
