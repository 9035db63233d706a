use super::node::TrieNode;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Depth-first traversal with an explicit stack so deep trees never recurse.
#[inline]
pub(super) fn traverse<H, F>(root: &TrieNode<H>, mut action: F)
where
    F: FnMut(&TrieNode<H>, usize),
{
    let mut stack: Vec<(&TrieNode<H>, usize)> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push((root, 0));

    while let Some((node, depth)) = stack.pop() {
        action(node, depth);

        if node.is_leaf() {
            continue;
        }
        for child in node.literal_children.values() {
            stack.push((child, depth + 1));
        }
        if let Some(child) = node.variable_child.as_deref() {
            stack.push((child, depth + 1));
        }
        if let Some(child) = node.wildcard_child.as_deref() {
            stack.push((child, depth + 1));
        }
    }
}

pub(super) fn max_depth<H>(root: &TrieNode<H>) -> usize {
    let mut deepest = 0;
    traverse(root, |_, depth| deepest = deepest.max(depth));
    deepest
}

#[cfg(test)]
pub(super) fn count_handlers<H>(root: &TrieNode<H>) -> usize {
    let mut count = 0;
    traverse(root, |node, _| {
        if node.handler.is_some() {
            count += 1;
        }
    });
    count
}
