use super::QuestionSeed;

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "crypto-01",
        tag: "symmetric",
        text: "Which algorithm is a symmetric block cipher?",
        options: &["ECDSA", "Diffie-Hellman", "RSA", "AES"],
        correct: 3,
        explanation: "AES uses the same key to encrypt and decrypt 128-bit blocks.",
    },
    QuestionSeed {
        id: "crypto-02",
        tag: "modes",
        text: "Why is ECB mode unsuitable for encrypting most data?",
        options: &[
            "It cannot be decrypted",
            "It is too slow",
            "Identical plaintext blocks produce identical ciphertext blocks",
            "It needs a 4096-bit key",
        ],
        correct: 2,
        explanation: "ECB leaks patterns, famously visible in the encrypted penguin image.",
    },
    QuestionSeed {
        id: "crypto-03",
        tag: "modes",
        text: "What does an AEAD mode such as AES-GCM provide beyond confidentiality?",
        options: &["Compression", "Integrity and authenticity", "Key exchange", "Non-repudiation"],
        correct: 1,
        explanation: "Authenticated encryption detects any tampering with the ciphertext or associated data.",
    },
    QuestionSeed {
        id: "crypto-04",
        tag: "modes",
        text: "Reusing a nonce with the same key in AES-GCM:",
        options: &[
            "Is harmless",
            "Can reveal plaintext relationships and allow forgeries",
            "Only slows encryption",
            "Is required for decryption",
        ],
        correct: 1,
        explanation: "Nonce reuse breaks both confidentiality and authentication in GCM.",
    },
    QuestionSeed {
        id: "crypto-05",
        tag: "hashing",
        text: "Which property means it is infeasible to find two inputs with the same hash?",
        options: &[
            "Collision resistance",
            "Avalanche effect",
            "Determinism",
            "Preimage resistance",
        ],
        correct: 0,
        explanation: "Collision resistance concerns any pair of colliding inputs.",
    },
    QuestionSeed {
        id: "crypto-06",
        tag: "hashing",
        text: "Which hash function is considered broken for collision resistance?",
        options: &["BLAKE2", "SHA-256", "SHA-3", "MD5"],
        correct: 3,
        explanation: "Practical MD5 collisions have existed since 2004.",
    },
    QuestionSeed {
        id: "crypto-07",
        tag: "passwords",
        text: "What is the purpose of a salt in password hashing?",
        options: &[
            "To speed up hashing",
            "To shorten the hash",
            "To encrypt the password",
            "To make identical passwords hash differently and defeat precomputed tables",
        ],
        correct: 3,
        explanation: "Unique salts force attackers to crack each hash separately.",
    },
    QuestionSeed {
        id: "crypto-08",
        tag: "asymmetric",
        text: "In public-key encryption, which key encrypts a message for a recipient?",
        options: &[
            "A shared symmetric key only",
            "The sender's private key",
            "The recipient's public key",
            "The recipient's private key",
        ],
        correct: 2,
        explanation: "Only the recipient's private key can decrypt what their public key encrypted.",
    },
    QuestionSeed {
        id: "crypto-09",
        tag: "signatures",
        text: "A digital signature is created with:",
        options: &[
            "The signer's public key",
            "The signer's private key",
            "The verifier's public key",
            "A random nonce only",
        ],
        correct: 1,
        explanation: "Anyone can verify with the public key; only the key holder can sign.",
    },
    QuestionSeed {
        id: "crypto-10",
        tag: "key exchange",
        text: "Diffie-Hellman key exchange allows two parties to:",
        options: &[
            "Sign documents",
            "Agree on a shared secret over an insecure channel",
            "Hash passwords",
            "Compress data",
        ],
        correct: 1,
        explanation: "DH derives a shared secret without transmitting it.",
    },
    QuestionSeed {
        id: "crypto-11",
        tag: "key exchange",
        text: "Forward secrecy ensures that:",
        options: &[
            "Compromise of a long-term key does not expose past session keys",
            "Messages are delivered in order",
            "Keys never expire",
            "Future keys are derived from past keys",
        ],
        correct: 0,
        explanation: "Ephemeral key exchange keeps each session key independent of the long-term key.",
    },
    QuestionSeed {
        id: "crypto-12",
        tag: "mac",
        text: "An HMAC provides:",
        options: &[
            "Public key distribution",
            "Random number generation",
            "Encryption",
            "Message integrity and authenticity using a shared key",
        ],
        correct: 3,
        explanation: "HMAC combines a hash with a secret key to authenticate messages.",
    },
    QuestionSeed {
        id: "crypto-13",
        tag: "pki",
        text: "What does a certificate authority do?",
        options: &[
            "Stores users' private keys",
            "Generates session keys for TLS",
            "Encrypts all web traffic",
            "Signs certificates binding public keys to identities",
        ],
        correct: 3,
        explanation: "Clients trust CA signatures to validate that a key belongs to a domain.",
    },
    QuestionSeed {
        id: "crypto-14",
        tag: "key size",
        text: "Which RSA key size is the commonly recommended minimum today?",
        options: &["512 bits", "1024 bits", "2048 bits", "256 bits"],
        correct: 2,
        explanation: "1024-bit RSA is considered within reach of well-funded attackers.",
    },
    QuestionSeed {
        id: "crypto-15",
        tag: "encoding",
        text: "Base64 is:",
        options: &[
            "A weak encryption algorithm",
            "An encoding with no secrecy",
            "A hash function",
            "A key derivation function",
        ],
        correct: 1,
        explanation: "Base64 is trivially reversible and provides no confidentiality.",
    },
];
