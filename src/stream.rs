pub struct Stream<I: Iterator<Item = u8>> {
    pub line: u32,
    pub column: u32,
    peeked: Option<u8>,
    iter: I,
}

impl<I: Iterator<Item = u8>> Stream<I> {
    pub fn new(line: u32, iter: I) -> Stream<I> {
        Self {
            line,
            column: 1,
            peeked: None,
            iter,
        }
    }

    /* Consumes the peeked byte; a no-op when nothing has been peeked */
    pub fn forward(&mut self) {
        if let Some(byte) = self.peeked.take() {
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn peek(&mut self) -> Option<u8> {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked
    }
}
