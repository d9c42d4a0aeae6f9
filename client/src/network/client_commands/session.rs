use std::fmt;
use std::io;

use realm_core::encrypt::hash_login_password;
use realm_core::types::{CharacterId, WireText};
use realm_core::{CommandError, PacketWriter};

/// `CL_LOGIN`: opens a session for one character.
///
/// The password is hashed as soon as the command is built and the plaintext
/// is dropped; only the hash is kept and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCmd {
    version: u8,
    name: WireText,
    password_hash: WireText,
}

impl LoginCmd {
    pub fn new(name: &str, password: &str, version: u8) -> Result<Self, CommandError> {
        let name = WireText::new(name)?;
        let password_hash = WireText::new(hash_login_password(password))?;

        log::debug!("Building login command: name={}, version={}", name, version);
        Ok(Self {
            version,
            name,
            password_hash,
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    pub fn payload_len(&self) -> usize {
        1 + self.name.encoded_len() + self.password_hash.encoded_len()
    }

    /// `[version u8][name string][password hash string]`
    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_ubyte(self.version)?;
        self.name.encode(writer)?;
        self.password_hash.encode(writer)
    }
}

impl fmt::Display for LoginCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoginCmd(name={}, version={})", self.name, self.version)
    }
}

/// `CL_REQUEST_APPEARANCE`: asks the server to resend how a character looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestAppearanceCmd {
    char_id: CharacterId,
}

impl RequestAppearanceCmd {
    pub const PAYLOAD_LEN: usize = 4;

    pub fn new(char_id: CharacterId) -> Self {
        log::trace!("Building request-appearance command: char_id={}", char_id);
        Self { char_id }
    }

    pub fn char_id(&self) -> CharacterId {
        self.char_id
    }

    pub fn encode<W: PacketWriter + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.char_id.encode(writer)
    }
}

impl fmt::Display for RequestAppearanceCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestAppearanceCmd(char_id={})", self.char_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(cmd: &LoginCmd) -> Vec<u8> {
        let mut out = Vec::new();
        cmd.encode(&mut out).unwrap();
        out
    }

    #[test]
    /// Version, then name, then the hashed password, each string length-prefixed.
    fn login_layout() {
        let cmd = LoginCmd::new("Hero", "secret", 100).unwrap();
        let bytes = payload(&cmd);

        assert_eq!(bytes[0], 100);
        assert_eq!(&bytes[1..3], &[0x00, 0x04]);
        assert_eq!(&bytes[3..7], b"Hero");
        assert_eq!(&bytes[7..9], &[0x00, 32]);
        assert_eq!(&bytes[9..], hash_login_password("secret").as_bytes());
        assert_eq!(bytes.len(), cmd.payload_len());
    }

    #[test]
    /// The plaintext never reaches the wire.
    fn login_does_not_carry_the_plaintext() {
        let cmd = LoginCmd::new("Hero", "hunter2hunter2", 1).unwrap();
        let bytes = payload(&cmd);
        assert!(!bytes.windows(14).any(|w| w == b"hunter2hunter2"));
    }

    #[test]
    fn login_display_hides_the_hash() {
        let cmd = LoginCmd::new("Hero", "secret", 100).unwrap();
        let text = cmd.to_string();
        assert_eq!(text, "LoginCmd(name=\"Hero\", version=100)");
        assert!(!text.contains(cmd.password_hash()));
    }

    #[test]
    fn login_rejects_unencodable_name() {
        let name = "n".repeat(70_000);
        assert_eq!(
            LoginCmd::new(&name, "secret", 100),
            Err(CommandError::TextTooLong { len: 70_000 })
        );
    }

    #[test]
    fn request_appearance_is_the_bare_id() {
        let mut out = Vec::new();
        RequestAppearanceCmd::new(CharacterId::new(7))
            .encode(&mut out)
            .unwrap();
        assert_eq!(out, [0, 0, 0, 7]);
    }
}
