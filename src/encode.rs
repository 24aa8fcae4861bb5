use super::*;

pub struct Encoder {
    data: Vec<u8>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }

    pub fn emit_raw_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data)
    }

    /// Emit `object` in compact form: `{`, then each entry's raw key bytes,
    /// `:`, raw value bytes, comma separated, then `}`.  Entry content is
    /// copied through verbatim, never validated or re-encoded, which is what
    /// keeps nested ordering and number formatting intact.
    pub fn emit_object(&mut self, object: &Object) {
        self.data.push(b'{');
        for (idx, entry) in object.iter().enumerate() {
            if idx != 0 {
                self.data.push(b',');
            }
            self.data.extend_from_slice(entry.key);
            self.data.push(b':');
            self.data.extend_from_slice(entry.value);
        }
        self.data.push(b'}')
    }
}

pub fn emit(object: &Object) -> Vec<u8> {
    let mut e = Encoder::new();
    e.emit_object(object);
    e.build()
}
