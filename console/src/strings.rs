macro_rules! define_strings {
    (
        $($name:ident = $value:literal);*$(;)?
    ) => {
        $(
            pub const $name: &str = $value;
        )*
    };
}

pub mod utils {
    define_strings! {
        VERBOSE =
            "Increase logging verbosity (-v info, -vv debug, -vvv trace). \
            Ignored when RUST_LOG is set.";
        THREADS =
            "Number of threads used for record normalization. Defaults to \
            all available cores.";
    }
}

pub mod input {
    define_strings! {
        INPUT =
            "Path to the gene position records (JSON array, TSV with a header \
            row, or BED with a name column).";
        FORMAT =
            "Format of the input file. `auto` picks it from the extension \
            (.json, .bed, anything else is read as TSV).";
        FAI =
            "FASTA index (.fai) whose sequences are treated as standard \
            chromosomes. Defaults to chr1-chr22, chrX and chrY.";
    }
}

pub mod build {
    define_strings! {
        OUTPUT =
            "Path of the BED file to write. Writes to stdout when omitted.";
        EXTEND =
            "Number of base pairs added to both sides of every gene interval. \
            Start positions never go below zero.";
        KEEP_ALT =
            "Keep records on alternate locus contigs (names containing `alt`).";
        KEEP_FIX =
            "Keep records on patch contigs (names containing `fix`).";
        CROSS_CONTIG =
            "What to do when one gene has records on several contigs: keep \
            the first contig seen, or fail.";
        STANDARD_ONLY =
            "Drop records outside the standard chromosome set before merging.";
        CONFIG =
            "JSON file with merge settings (extend_bp, remove_alt, remove_fix, \
            cross_contig). Command-line flags take precedence.";
    }
}

pub mod classify {
    define_strings! {
        JSON =
            "Print a JSON object with `genes` (standard contigs) and \
            `non_standard` arrays instead of tables.";
    }
}
