use super::QuestionSeed;

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "prog-01",
        tag: "memory safety",
        text: "What is a buffer overflow?",
        options: &[
            "Sending too many packets to a network card",
            "Writing data past the end of an allocated buffer",
            "Allocating more memory than the system has",
            "Reading a file larger than available disk space",
        ],
        correct: 1,
        explanation: "A buffer overflow writes beyond the bounds of a buffer and can corrupt adjacent memory such as return addresses.",
    },
    QuestionSeed {
        id: "prog-02",
        tag: "memory safety",
        text: "Which C function is notorious for enabling buffer overflows because it does not check bounds?",
        options: &["gets", "fgets", "snprintf", "strncpy"],
        correct: 0,
        explanation: "gets() reads until a newline with no length limit and was removed from C11.",
    },
    QuestionSeed {
        id: "prog-03",
        tag: "memory safety",
        text: "What does a use-after-free bug involve?",
        options: &[
            "Never freeing allocated memory",
            "Allocating memory on the stack instead of the heap",
            "Freeing memory twice",
            "Accessing memory after it has been released",
        ],
        correct: 3,
        explanation: "Use-after-free dereferences a dangling pointer to memory that may already be reused.",
    },
    QuestionSeed {
        id: "prog-04",
        tag: "memory safety",
        text: "Which mitigation places a random value before the return address to detect stack smashing?",
        options: &["Control-flow guard", "ASLR", "DEP", "Stack canary"],
        correct: 3,
        explanation: "A stack canary is checked before the function returns; a changed value aborts the program.",
    },
    QuestionSeed {
        id: "prog-05",
        tag: "memory safety",
        text: "What does ASLR randomize?",
        options: &[
            "The scheduling order of threads",
            "The order of function arguments",
            "The memory addresses of program segments",
            "The encryption key used for swap",
        ],
        correct: 2,
        explanation: "Address Space Layout Randomization makes addresses of the stack, heap, and libraries unpredictable.",
    },
    QuestionSeed {
        id: "prog-06",
        tag: "integers",
        text: "Adding 1 to the maximum value of a signed 32-bit integer in C results in:",
        options: &[
            "A guaranteed wrap to the minimum value",
            "Undefined behavior",
            "A compile-time error",
            "Automatic promotion to 64 bits",
        ],
        correct: 1,
        explanation: "Signed integer overflow is undefined behavior in C, which compilers may exploit during optimization.",
    },
    QuestionSeed {
        id: "prog-07",
        tag: "input handling",
        text: "What is the safest general strategy for validating user input?",
        options: &[
            "Blocklist known bad characters",
            "Allowlist expected formats and reject everything else",
            "Escape input only when it looks suspicious",
            "Trust input from authenticated users",
        ],
        correct: 1,
        explanation: "Allowlisting defines what is acceptable, which is far more robust than trying to enumerate bad input.",
    },
    QuestionSeed {
        id: "prog-08",
        tag: "injection",
        text: "Which technique prevents SQL injection most reliably?",
        options: &[
            "Parameterized queries",
            "Limiting input length",
            "Using stored procedures with string concatenation",
            "Escaping quotes manually",
        ],
        correct: 0,
        explanation: "Parameterized queries keep data separate from the SQL statement so input is never parsed as code.",
    },
    QuestionSeed {
        id: "prog-09",
        tag: "injection",
        text: "A program builds a shell command as \"ping \" + host. What vulnerability does this risk?",
        options: &["Race condition", "Integer overflow", "Path traversal", "Command injection"],
        correct: 3,
        explanation: "Input such as \"8.8.8.8; rm -rf /\" would run an extra command through the shell.",
    },
    QuestionSeed {
        id: "prog-10",
        tag: "injection",
        text: "How should a program run an external tool with user-supplied arguments?",
        options: &[
            "Base64-encode the arguments first",
            "Wrap the arguments in double quotes",
            "Pass a single string to the system shell",
            "Invoke the binary directly with an argument vector",
        ],
        correct: 3,
        explanation: "Passing an argument vector avoids shell parsing, so metacharacters in input stay literal.",
    },
    QuestionSeed {
        id: "prog-11",
        tag: "files",
        text: "What is path traversal?",
        options: &[
            "Walking a directory tree recursively",
            "Following symbolic links during backup",
            "Using sequences like ../ to access files outside an intended directory",
            "Listing the PATH environment variable",
        ],
        correct: 2,
        explanation: "Unsanitized file names containing ../ can escape the base directory the application meant to serve.",
    },
    QuestionSeed {
        id: "prog-12",
        tag: "files",
        text: "Which check best prevents path traversal when serving files?",
        options: &[
            "Reject names containing the string \"..\" only",
            "Canonicalize the path and verify it stays under the base directory",
            "Convert the name to lowercase",
            "Limit file names to 255 characters",
        ],
        correct: 1,
        explanation: "Canonicalization resolves links and dot segments, so the final path can be compared with the base.",
    },
    QuestionSeed {
        id: "prog-13",
        tag: "concurrency",
        text: "A TOCTOU bug is a kind of:",
        options: &["Injection flaw", "Race condition", "Format string bug", "Memory leak"],
        correct: 1,
        explanation: "Time-of-check to time-of-use races exploit the gap between validating a resource and using it.",
    },
    QuestionSeed {
        id: "prog-14",
        tag: "format strings",
        text: "Why is printf(user_input) dangerous in C?",
        options: &[
            "Format specifiers in the input can read or write memory",
            "It always truncates long strings",
            "It cannot print Unicode",
            "It is slower than puts",
        ],
        correct: 0,
        explanation: "Specifiers like %x and %n let an attacker read the stack or write to memory.",
    },
    QuestionSeed {
        id: "prog-15",
        tag: "secrets",
        text: "Where should application secrets such as API keys be kept?",
        options: &[
            "In client-side JavaScript",
            "In code comments for easy rotation",
            "Hard-coded in source code",
            "In a secrets manager or injected environment configuration",
        ],
        correct: 3,
        explanation: "Secrets in source control leak through history and forks; use a dedicated secret store.",
    },
    QuestionSeed {
        id: "prog-16",
        tag: "randomness",
        text: "Which source of randomness is appropriate for generating session tokens?",
        options: &[
            "The process ID",
            "A counter incremented per request",
            "rand() seeded with the current time",
            "A cryptographically secure random number generator",
        ],
        correct: 3,
        explanation: "Tokens must be unpredictable; only a CSPRNG provides that guarantee.",
    },
    QuestionSeed {
        id: "prog-17",
        tag: "passwords",
        text: "How should passwords be stored?",
        options: &[
            "Encoded with Base64",
            "Encrypted with AES",
            "Hashed with a slow, salted algorithm such as Argon2 or bcrypt",
            "Hashed once with MD5",
        ],
        correct: 2,
        explanation: "Slow salted hashes resist brute force and rainbow tables; encryption is reversible.",
    },
    QuestionSeed {
        id: "prog-18",
        tag: "errors",
        text: "What is the risk of returning full stack traces to end users?",
        options: &[
            "It increases response size only",
            "It discloses internal details useful to attackers",
            "It breaks HTTP caching",
            "There is no risk",
        ],
        correct: 1,
        explanation: "Stack traces reveal frameworks, file paths, and logic that help attackers craft exploits.",
    },
    QuestionSeed {
        id: "prog-19",
        tag: "design",
        text: "The principle of least privilege means:",
        options: &[
            "Users get administrator rights by default",
            "Code and users receive only the permissions they need",
            "Privileges are checked only at login",
            "All services run as root for simplicity",
        ],
        correct: 1,
        explanation: "Limiting permissions limits the damage a compromised component can do.",
    },
    QuestionSeed {
        id: "prog-20",
        tag: "design",
        text: "What does \"fail securely\" mean?",
        options: &[
            "On failure, the system defaults to a safe, denying state",
            "Errors are silently ignored",
            "The application restarts automatically",
            "Errors should grant access to avoid user frustration",
        ],
        correct: 0,
        explanation: "When something goes wrong the system should deny access rather than fall open.",
    },
    QuestionSeed {
        id: "prog-21",
        tag: "deserialization",
        text: "Why is deserializing untrusted data with native object serializers risky?",
        options: &[
            "It always loses precision",
            "It cannot handle nested objects",
            "It uses too much memory",
            "Crafted payloads can instantiate classes and execute code",
        ],
        correct: 3,
        explanation: "Gadget chains in native serializers can lead to remote code execution.",
    },
    QuestionSeed {
        id: "prog-22",
        tag: "dependencies",
        text: "What is the main purpose of a dependency lock file?",
        options: &[
            "Encrypting third-party code",
            "Speeding up compilation",
            "Preventing other developers from editing dependencies",
            "Pinning exact versions so builds are reproducible",
        ],
        correct: 3,
        explanation: "Locked versions make builds repeatable and make unexpected upstream changes visible.",
    },
    QuestionSeed {
        id: "prog-23",
        tag: "dependencies",
        text: "Typosquatting in package registries refers to:",
        options: &[
            "Abandoned packages",
            "Packages that squat on network ports",
            "Malicious packages with names similar to popular ones",
            "Packages with spelling mistakes in documentation",
        ],
        correct: 2,
        explanation: "Attackers publish lookalike names hoping developers mistype a dependency.",
    },
    QuestionSeed {
        id: "prog-24",
        tag: "memory safety",
        text: "Which language feature prevents data races at compile time in Rust?",
        options: &[
            "Garbage collection",
            "The ownership and borrowing rules",
            "Exceptions",
            "Dynamic typing",
        ],
        correct: 1,
        explanation: "Rust forbids shared mutable access without synchronization through its borrow checker.",
    },
    QuestionSeed {
        id: "prog-25",
        tag: "memory safety",
        text: "What does a double free lead to?",
        options: &[
            "Faster deallocation",
            "Heap metadata corruption that can be exploitable",
            "A guaranteed compiler error",
            "Nothing; the second free is ignored",
        ],
        correct: 1,
        explanation: "Freeing the same block twice corrupts allocator structures and may allow arbitrary writes.",
    },
    QuestionSeed {
        id: "prog-26",
        tag: "testing",
        text: "What is fuzzing?",
        options: &[
            "Feeding random or mutated inputs to find crashes",
            "Obfuscating binaries",
            "Compressing test data",
            "Manually reviewing source code",
        ],
        correct: 0,
        explanation: "Fuzzers generate unexpected inputs automatically to uncover parsing and memory bugs.",
    },
    QuestionSeed {
        id: "prog-27",
        tag: "testing",
        text: "Static application security testing (SAST) analyzes:",
        options: &[
            "Network traffic",
            "User behavior",
            "Running applications over HTTP",
            "Source code or binaries without executing them",
        ],
        correct: 3,
        explanation: "SAST inspects code paths statically; DAST tests the running application.",
    },
    QuestionSeed {
        id: "prog-28",
        tag: "logging",
        text: "Which data should never be written to application logs?",
        options: &[
            "Timestamps",
            "HTTP status codes",
            "Request IDs",
            "Passwords and full card numbers",
        ],
        correct: 3,
        explanation: "Logs are widely accessible and retained; credentials and sensitive data must be excluded.",
    },
    QuestionSeed {
        id: "prog-29",
        tag: "injection",
        text: "Log injection happens when:",
        options: &[
            "The logger runs out of disk space",
            "Logs are rotated too often",
            "User input containing newlines forges additional log entries",
            "Logs are compressed",
        ],
        correct: 2,
        explanation: "Unescaped CR/LF characters let attackers insert fake entries that mislead investigators.",
    },
    QuestionSeed {
        id: "prog-30",
        tag: "regex",
        text: "What is ReDoS?",
        options: &[
            "Remote desktop over SSH",
            "Denial of service through catastrophic regex backtracking",
            "A replicated database",
            "Redirect on session expiry",
        ],
        correct: 1,
        explanation: "Patterns with nested quantifiers can take exponential time on crafted input.",
    },
    QuestionSeed {
        id: "prog-31",
        tag: "xml",
        text: "An XXE attack abuses:",
        options: &[
            "XML namespaces",
            "XML external entity resolution",
            "Cross-site scripting in XML",
            "Compression in XML parsers",
        ],
        correct: 1,
        explanation: "External entities can read local files or trigger requests; disable DTD processing for untrusted XML.",
    },
    QuestionSeed {
        id: "prog-32",
        tag: "comparison",
        text: "Why compare secrets with a constant-time function?",
        options: &[
            "To avoid timing side channels that leak matching prefixes",
            "To support Unicode",
            "To reduce memory use",
            "It is faster",
        ],
        correct: 0,
        explanation: "Early-exit comparisons take measurably longer when more leading bytes match.",
    },
    QuestionSeed {
        id: "prog-33",
        tag: "design",
        text: "Defense in depth means:",
        options: &[
            "Hiding the source code",
            "Using the deepest call stack possible",
            "Relying on one strong control",
            "Layering multiple independent security controls",
        ],
        correct: 3,
        explanation: "If one layer fails, others still protect the system.",
    },
    QuestionSeed {
        id: "prog-34",
        tag: "design",
        text: "\"Security through obscurity\" alone is considered weak because:",
        options: &[
            "It is illegal",
            "It requires special hardware",
            "Obscure code runs slowly",
            "Once the secret design is discovered, no protection remains",
        ],
        correct: 3,
        explanation: "Secrecy of design can complement, but never replace, real controls.",
    },
    QuestionSeed {
        id: "prog-35",
        tag: "integers",
        text: "Multiplying two user-controlled sizes before calling malloc can cause:",
        options: &[
            "A format string bug",
            "Nothing, malloc checks it",
            "An integer overflow leading to an undersized allocation",
            "A stack canary failure",
        ],
        correct: 2,
        explanation: "The product can wrap to a small value; subsequent writes then overflow the buffer.",
    },
    QuestionSeed {
        id: "prog-36",
        tag: "memory safety",
        text: "DEP / NX prevents:",
        options: &[
            "Heap fragmentation",
            "Executing code from data pages such as the stack",
            "Reading uninitialized memory",
            "Integer overflows",
        ],
        correct: 1,
        explanation: "Non-executable memory stops injected shellcode from running directly.",
    },
    QuestionSeed {
        id: "prog-37",
        tag: "memory safety",
        text: "Return-oriented programming (ROP) bypasses DEP by:",
        options: &[
            "Disabling the MMU",
            "Chaining existing executable code snippets ending in ret",
            "Encrypting shellcode",
            "Using only heap memory",
        ],
        correct: 1,
        explanation: "ROP reuses instructions already in executable pages, so no new code is injected.",
    },
    QuestionSeed {
        id: "prog-38",
        tag: "authentication",
        text: "What is the weakness of rolling your own authentication scheme?",
        options: &[
            "Subtle design flaws are likely; vetted libraries and protocols are safer",
            "It cannot support passwords",
            "It requires a database",
            "It is always slower",
        ],
        correct: 0,
        explanation: "Authentication has many subtle failure modes that established implementations already handle.",
    },
    QuestionSeed {
        id: "prog-39",
        tag: "input handling",
        text: "Canonicalization should happen ____ validation.",
        options: &["Instead of", "Never alongside", "After", "Before"],
        correct: 3,
        explanation: "Validate the normalized form; otherwise alternate encodings slip past the checks.",
    },
    QuestionSeed {
        id: "prog-40",
        tag: "concurrency",
        text: "A deadlock occurs when:",
        options: &[
            "A thread exits early",
            "A lock is released twice",
            "Memory is exhausted",
            "Two threads each hold a lock the other needs",
        ],
        correct: 3,
        explanation: "Circular waiting on locks leaves every participant blocked forever.",
    },
    QuestionSeed {
        id: "prog-41",
        tag: "files",
        text: "Creating temporary files with predictable names in /tmp risks:",
        options: &[
            "Running out of inodes",
            "Nothing on modern systems",
            "Symlink attacks by other local users",
            "Faster disk wear",
        ],
        correct: 2,
        explanation: "An attacker can pre-create a symlink at the predictable path to redirect writes.",
    },
    QuestionSeed {
        id: "prog-42",
        tag: "errors",
        text: "Ignoring the return value of a security-relevant call such as setuid() can:",
        options: &[
            "Cause a memory leak only",
            "Leave the process running with unintended privileges",
            "Improve performance",
            "Trigger a compile error in C",
        ],
        correct: 1,
        explanation: "If the privilege drop fails silently, the program keeps elevated rights.",
    },
    QuestionSeed {
        id: "prog-43",
        tag: "web",
        text: "Server-side request forgery (SSRF) lets an attacker:",
        options: &[
            "Read client clipboard data",
            "Make the server issue requests to internal or arbitrary hosts",
            "Forge browser cookies",
            "Change DNS records",
        ],
        correct: 1,
        explanation: "SSRF abuses server-side fetch features to reach internal services or metadata endpoints.",
    },
    QuestionSeed {
        id: "prog-44",
        tag: "code review",
        text: "Which practice catches security bugs earliest in development?",
        options: &[
            "Threat modeling and code review during design and implementation",
            "Bug bounty programs",
            "Incident response drills",
            "Penetration testing after release",
        ],
        correct: 0,
        explanation: "Fixing flaws in design and review is cheaper than after deployment.",
    },
    QuestionSeed {
        id: "prog-45",
        tag: "threat modeling",
        text: "In STRIDE, the \"T\" stands for:",
        options: &["Tokenization", "Throttling", "Tracing", "Tampering"],
        correct: 3,
        explanation: "STRIDE: Spoofing, Tampering, Repudiation, Information disclosure, Denial of service, Elevation of privilege.",
    },
    QuestionSeed {
        id: "prog-46",
        tag: "injection",
        text: "Using eval() on user input in JavaScript or Python primarily risks:",
        options: &["Memory leaks", "Slow startup", "Unicode errors", "Code injection"],
        correct: 3,
        explanation: "eval executes arbitrary expressions supplied by the attacker.",
    },
    QuestionSeed {
        id: "prog-47",
        tag: "memory safety",
        text: "Reading uninitialized memory can lead to:",
        options: &[
            "Automatic garbage collection",
            "Faster execution only",
            "Information disclosure of previous contents",
            "Guaranteed zero values",
        ],
        correct: 2,
        explanation: "Stale data such as keys or pointers may be exposed to the attacker.",
    },
    QuestionSeed {
        id: "prog-48",
        tag: "design",
        text: "Which statement about client-side validation is correct?",
        options: &[
            "It replaces server-side validation",
            "It improves usability but must be repeated on the server",
            "It prevents all injection attacks",
            "It is required by HTTP",
        ],
        correct: 1,
        explanation: "Attackers bypass the client entirely, so the server must enforce every rule.",
    },
    QuestionSeed {
        id: "prog-49",
        tag: "secrets",
        text: "After accidentally committing a secret to a public repository you should first:",
        options: &[
            "Delete the commit and move on",
            "Revoke and rotate the secret",
            "Make the repository private",
            "Add the file to .gitignore",
        ],
        correct: 1,
        explanation: "The secret must be considered compromised; rewriting history does not undo exposure.",
    },
    QuestionSeed {
        id: "prog-50",
        tag: "memory safety",
        text: "Which category of languages largely eliminates buffer overflows by design?",
        options: &[
            "Memory-safe languages with bounds checking",
            "Assembly languages",
            "Languages without a type system",
            "Macro languages",
        ],
        correct: 0,
        explanation: "Bounds-checked, memory-safe languages turn out-of-bounds access into a defined error.",
    },
];
