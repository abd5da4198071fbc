//! Static descriptive data for each algorithm
//!
//! Display-only metadata: complexity classes, stability, and a short
//! description. Lookup by identifier never fails; unknown names get a
//! designated "Unknown Algorithm" record, since this is advisory display
//! data rather than an executable choice.

use crate::engine::AlgorithmKind;

/// Big-O figures for best/average/worst cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Descriptive record for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: TimeComplexity,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub is_stable: bool,
}

/// Fallback record for unrecognized identifiers
pub const UNKNOWN_ALGORITHM: AlgorithmInfo = AlgorithmInfo {
    name: "Unknown Algorithm",
    time_complexity: TimeComplexity {
        best: "Unknown",
        average: "Unknown",
        worst: "Unknown",
    },
    space_complexity: "Unknown",
    description: "No information available for this algorithm.",
    is_stable: false,
};

const BUBBLE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "A simple sorting algorithm that repeatedly steps through the list, compares \
        adjacent elements, and swaps them if they're in the wrong order. The pass through the \
        list is repeated until the list is sorted.",
    is_stable: true,
};

const SELECTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: TimeComplexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "An in-place comparison sorting algorithm that divides the input into a sorted \
        and an unsorted region. It repeatedly selects the smallest element from the unsorted \
        region and moves it to the end of the sorted region.",
    is_stable: false,
};

const INSERTION_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "A simple sorting algorithm that builds the final sorted array one item at a \
        time. It is much less efficient on large lists than more advanced algorithms but can be \
        efficient for small data sets and is often used as part of more sophisticated algorithms.",
    is_stable: true,
};

const MERGE_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space_complexity: "O(n)",
    description: "An efficient, stable, divide-and-conquer algorithm. Merge sort divides the \
        input array into two halves, calls itself for the two halves, and then merges the two \
        sorted halves.",
    is_stable: true,
};

const QUICK_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space_complexity: "O(log n)",
    description: "An efficient, divide-and-conquer algorithm. Quicksort works by selecting a \
        'pivot' element and partitioning the array around the pivot so that elements less than \
        the pivot are on the left and elements greater than the pivot are on the right.",
    is_stable: false,
};

const HEAP_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space_complexity: "O(1)",
    description: "A comparison-based sorting algorithm that uses a binary heap data structure. \
        It divides its input into a sorted and an unsorted region, and iteratively shrinks the \
        unsorted region by extracting the largest element and moving it to the sorted region.",
    is_stable: false,
};

const RADIX_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Radix Sort",
    time_complexity: TimeComplexity {
        best: "O(nk)",
        average: "O(nk)",
        worst: "O(nk)",
    },
    space_complexity: "O(n+k)",
    description: "A non-comparative sorting algorithm that sorts data with integer keys by \
        grouping keys by individual digits which share the same significant position and value. \
        Radix sort uses counting sort as a subroutine to sort the digits.",
    is_stable: true,
};

const BUCKET_INFO: AlgorithmInfo = AlgorithmInfo {
    name: "Bucket Sort",
    time_complexity: TimeComplexity {
        best: "O(n+k)",
        average: "O(n+k)",
        worst: "O(n²)",
    },
    space_complexity: "O(n+k)",
    description: "A sorting algorithm that works by distributing the elements into a number of \
        buckets, then sorting each bucket individually, and finally concatenating all the sorted \
        buckets. Bucket sort is mainly useful when the input is uniformly distributed over a \
        range.",
    is_stable: true,
};

impl AlgorithmInfo {
    /// The static record for a known algorithm kind
    pub fn for_kind(kind: AlgorithmKind) -> &'static AlgorithmInfo {
        match kind {
            AlgorithmKind::Bubble => &BUBBLE_INFO,
            AlgorithmKind::Selection => &SELECTION_INFO,
            AlgorithmKind::Insertion => &INSERTION_INFO,
            AlgorithmKind::Merge => &MERGE_INFO,
            AlgorithmKind::Quick => &QUICK_INFO,
            AlgorithmKind::Heap => &HEAP_INFO,
            AlgorithmKind::Radix => &RADIX_INFO,
            AlgorithmKind::Bucket => &BUCKET_INFO,
        }
    }

    /// Look up a record by identifier, falling back to
    /// [`UNKNOWN_ALGORITHM`] for unrecognized names. Never fails.
    pub fn lookup(name: &str) -> &'static AlgorithmInfo {
        match name.parse::<AlgorithmKind>() {
            Ok(kind) => AlgorithmInfo::for_kind(kind),
            Err(_) => &UNKNOWN_ALGORITHM,
        }
    }
}
