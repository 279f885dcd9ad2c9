/// ZCL frame type (bits 0-1 of the frame control field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Global,
    ClusterSpecific,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameControl {
    pub frame_type: FrameType,
    pub is_manufacturer_specific: bool,
    pub direction: Direction,
    /// Set by the sender when it does not want a default response.
    pub disable_default_response: bool,
}

/// Decoded ZCL header of an incoming command, as supplied by the cluster
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZclHeader {
    pub frame_control: FrameControl,
    pub manufacturer: Option<u16>,
    /// Transaction sequence number, echoed in the default response.
    pub tsn: u8,
    pub command_id: u8,
}

impl ZclHeader {
    /// Header of a profile-wide command.
    pub fn general(tsn: u8, command_id: u8, direction: Direction) -> Self {
        Self::with_frame_type(FrameType::Global, tsn, command_id, direction)
    }

    /// Header of a cluster-specific command.
    pub fn cluster(tsn: u8, command_id: u8, direction: Direction) -> Self {
        Self::with_frame_type(FrameType::ClusterSpecific, tsn, command_id, direction)
    }

    pub fn with_manufacturer(mut self, manufacturer: u16) -> Self {
        self.frame_control.is_manufacturer_specific = true;
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn with_disable_default_response(mut self, disable: bool) -> Self {
        self.frame_control.disable_default_response = disable;
        self
    }

    pub fn disable_default_response(&self) -> bool {
        self.frame_control.disable_default_response
    }

    fn with_frame_type(
        frame_type: FrameType,
        tsn: u8,
        command_id: u8,
        direction: Direction,
    ) -> Self {
        Self {
            frame_control: FrameControl {
                frame_type,
                is_manufacturer_specific: false,
                direction,
                disable_default_response: false,
            },
            manufacturer: None,
            tsn,
            command_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, FrameType, ZclHeader};

    #[test]
    fn constructors_set_frame_type() {
        let header = ZclHeader::general(1, 0x01, Direction::ServerToClient);
        assert_eq!(header.frame_control.frame_type, FrameType::Global);
        assert!(!header.disable_default_response());

        let header = ZclHeader::cluster(2, 0x24, Direction::ClientToServer);
        assert_eq!(header.frame_control.frame_type, FrameType::ClusterSpecific);
        assert_eq!(header.tsn, 2);
        assert_eq!(header.command_id, 0x24);
    }

    #[test]
    fn manufacturer_marks_frame_specific() {
        let header =
            ZclHeader::cluster(1, 0x01, Direction::ServerToClient).with_manufacturer(0x1002);
        assert!(header.frame_control.is_manufacturer_specific);
        assert_eq!(header.manufacturer, Some(0x1002));
    }
}
