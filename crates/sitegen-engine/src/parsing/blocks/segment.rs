use super::kinds::CodeFence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    Text,
    Fence,
}

/// Line-by-line state machine that groups source lines into blocks.
///
/// Outside a fence, blank lines end the current block. Inside a fence every
/// line, blank or not, belongs to the block until a line ending in a fence.
pub struct BlockSegmenter<'a> {
    state: SegmentState,
    current: Vec<&'a str>,
    out: Vec<String>,
}

impl<'a> BlockSegmenter<'a> {
    pub fn new() -> Self {
        Self {
            state: SegmentState::Text,
            current: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        if self.state == SegmentState::Fence {
            self.current.push(line);
            if CodeFence::closes(line) {
                self.state = SegmentState::Text;
            }
            return;
        }

        if CodeFence::opens(line) {
            self.flush();
            self.state = SegmentState::Fence;
            self.current.push(line);
            return;
        }

        if line.trim().is_empty() {
            self.flush();
            return;
        }

        self.current.push(line);
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF flush, including an unterminated fence
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let joined = self.current.join("\n");
        let block = joined.trim();
        if !block.is_empty() {
            self.out.push(block.to_string());
        }
        self.current.clear();
    }
}

impl Default for BlockSegmenter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a document into trimmed blocks with internal newlines preserved.
///
/// Consecutive blank lines collapse into one boundary and no empty block is
/// ever produced. A fenced code block is kept whole, blank lines included.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    let mut segmenter = BlockSegmenter::new();
    for line in markdown.split('\n') {
        segmenter.push(line);
    }
    segmenter.finish()
}
